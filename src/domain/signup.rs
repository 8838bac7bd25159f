use anyhow::{Result, bail};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::validation::{is_valid_birth_year, is_valid_email, is_valid_password};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

/// The fixed set of skin concerns offered at signup, keyed by their Korean
/// labels as shown in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinConcern {
    Acne,
    Pigmentation,
    Wrinkle,
    Pore,
    Sensitive,
}

impl SkinConcern {
    pub const ALL: [SkinConcern; 5] = [
        SkinConcern::Acne,
        SkinConcern::Pigmentation,
        SkinConcern::Wrinkle,
        SkinConcern::Pore,
        SkinConcern::Sensitive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkinConcern::Acne => "여드름",
            SkinConcern::Pigmentation => "기미/잡티",
            SkinConcern::Wrinkle => "주름",
            SkinConcern::Pore => "모공",
            SkinConcern::Sensitive => "민감성",
        }
    }

    /// Backend category code. Acne still shares the PORE code with the pore
    /// concern; the backend has not assigned it a code of its own.
    pub fn code(self) -> &'static str {
        match self {
            SkinConcern::Acne => "PORE",
            SkinConcern::Pigmentation => "PIGMENT",
            SkinConcern::Wrinkle => "WRINKLE",
            SkinConcern::Pore => "PORE",
            SkinConcern::Sensitive => "SENSITIVE",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Registration payload as the backend expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    pub concerns: Vec<String>,
}

/// Raw form state. `validate` runs the same checks, in the same order, the
/// signup screen applied before submitting.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub gender: Option<Gender>,
    pub birth_year: Option<i32>,
    pub concerns: Vec<SkinConcern>,
    pub agreed: bool,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupRequest> {
        self.validate_with_year(Utc::now().year())
    }

    fn validate_with_year(&self, current_year: i32) -> Result<SignupRequest> {
        if self.name.trim().is_empty() {
            bail!("이름을 입력해주세요.");
        }
        if self.email.trim().is_empty() {
            bail!("이메일을 입력해주세요.");
        }
        if !is_valid_email(&self.email) {
            bail!("이메일 형식이 올바르지 않습니다.");
        }
        if self.password.is_empty() {
            bail!("비밀번호를 입력해주세요.");
        }
        if !is_valid_password(&self.password) {
            bail!("비밀번호는 8자 이상이며 영문과 숫자를 모두 포함해야 합니다.");
        }
        if self.password != self.confirm_password {
            bail!("비밀번호가 일치하지 않습니다.");
        }
        if let Some(year) = self.birth_year {
            if !is_valid_birth_year(year, current_year) {
                bail!("출생년도를 다시 확인해주세요.");
            }
        }
        if !self.agreed {
            bail!("이용약관에 동의해주세요.");
        }

        Ok(SignupRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
            gender: self.gender,
            birth_year: self.birth_year,
            concerns: self.concerns.iter().map(|c| c.code().to_string()).collect(),
        })
    }
}
