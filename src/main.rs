use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use skincheck::api::ApiClient;
use skincheck::config::AppConfig;
use skincheck::domain::analysis::FaceRegion;
use skincheck::domain::history;
use skincheck::domain::signup::{Gender, SignupForm, SkinConcern};
use skincheck::repository::{SessionRepository, database};
use skincheck::services::{AnalysisService, AuthService};
use skincheck::store::{AnalysisStore, HomeStore, SessionStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        print_usage();
        return Ok(());
    };

    let config = AppConfig::load()?;
    let pool = database::init_database(&config.database_file()?).await?;
    let repository = SessionRepository::new(Arc::new(pool));

    let session = Arc::new(SessionStore::new(repository.clone()));
    session.restore().await?;

    let client = Arc::new(ApiClient::new(&config, Arc::new(repository))?);
    let auth = AuthService::new(client.clone(), session.clone());
    let analysis = AnalysisService::new(client.clone(), Arc::new(AnalysisStore::new()));
    let home = HomeStore::new(client.clone());

    match command {
        "login" => {
            let email = args.get(1).context("usage: skincheck login <email> <password>")?;
            let password = args.get(2).context("usage: skincheck login <email> <password>")?;
            let user = auth.login(email, password).await?;
            println!("Logged in as {}", user.name);
        }
        "signup" => {
            let form = parse_signup_form(&args[1..])?;
            auth.signup(&form).await?;
            println!("Signup submitted. Check {} for the verification mail.", form.email);
        }
        "resend-verify" => {
            let email = args.get(1).context("usage: skincheck resend-verify <email>")?;
            auth.resend_verify_email(email).await?;
            println!("Verification mail resent to {email}");
        }
        "logout" => {
            auth.logout().await?;
            println!("Logged out");
        }
        "whoami" => match session.user().await {
            Some(user) => println!("{}", user.name),
            None => println!("Not logged in"),
        },
        "home" => {
            if let Err(err) = home.load().await {
                if err.is_unauthorized() {
                    println!("Session expired. Run `skincheck login` first.");
                }
                return Err(err.into());
            }
            if let Some(dashboard) = home.data().await {
                print_dashboard(&dashboard);
            }
        }
        "history" => {
            let selected: Option<NaiveDate> = match args.get(1) {
                Some(raw) => Some(raw.parse().context("expected a date like 2025-01-19")?),
                None => None,
            };
            let entries = analysis.history().await?;

            let dates = history::dates_with_entries(&entries);
            println!(
                "{} analyses across {} days",
                entries.len(),
                dates.len()
            );
            for entry in history::visible_entries(&entries, selected) {
                println!(
                    "#{} {} [{}] {}",
                    entry.analysis_id, entry.date, entry.skin_type, entry.summary
                );
            }
        }
        "analyze" => {
            let path = args.get(1).context("usage: skincheck analyze <image-path>")?;
            let result = analysis.analyze(Path::new(path)).await?;
            println!("Analysis #{} [{}]", result.analysis_id, result.skin_type);
            println!("{}", result.summary);
            for region in FaceRegion::ALL {
                let Some(view) = result.region(region) else {
                    continue;
                };
                for condition in &view.conditions {
                    println!(
                        "  {:?} {} {:.0} ({:?})",
                        region, condition.kind, condition.value, condition.level
                    );
                }
            }
        }
        "insight" => {
            let id: i64 = args
                .get(1)
                .context("usage: skincheck insight <analysis-id>")?
                .parse()
                .context("analysis id must be an integer")?;
            let insight = analysis.insight(id).await?;
            println!("Insight for analysis #{id} [{}]", insight.skin_type);
            for paragraph in insight.paragraphs() {
                println!("  {paragraph}");
            }
            for product in &insight.recommended_products {
                match &product.brand {
                    Some(brand) => println!("  → {} ({brand})", product.name),
                    None => println!("  → {}", product.name),
                }
            }
        }
        other => {
            print_usage();
            bail!("unknown command: {other}");
        }
    }

    Ok(())
}

fn parse_signup_form(args: &[String]) -> Result<SignupForm> {
    let usage = "usage: skincheck signup <name> <email> <password> \
                 [--gender M|F] [--birth-year <year>] [--concern <label>]...";
    let mut positional = Vec::new();
    let mut form = SignupForm::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--gender" => {
                form.gender = match iter.next().context(usage)?.as_str() {
                    "M" => Some(Gender::M),
                    "F" => Some(Gender::F),
                    other => bail!("unknown gender: {other}"),
                };
            }
            "--birth-year" => {
                form.birth_year = Some(iter.next().context(usage)?.parse()?);
            }
            "--concern" => {
                let label = iter.next().context(usage)?;
                let concern = SkinConcern::from_label(label)
                    .with_context(|| format!("unknown concern: {label}"))?;
                form.concerns.push(concern);
            }
            _ => positional.push(arg.clone()),
        }
    }
    let [name, email, password] = positional.as_slice() else {
        bail!("{usage}");
    };
    form.name = name.clone();
    form.email = email.clone();
    form.password = password.clone();
    form.confirm_password = password.clone();
    // the terms checkbox of the signup screen; submitting from the CLI
    // implies consent
    form.agreed = true;
    Ok(form)
}

fn print_dashboard(dashboard: &skincheck::domain::home::HomeDashboard) {
    let status = &dashboard.skin_status;
    println!(
        "Skin status — moisture {:.0}, elasticity {:.0}, pore {:.0}, pigmentation {:.0}",
        status.moisture, status.elasticity, status.pore, status.pigmentation
    );
    for section in &dashboard.recommendations {
        println!("[{}] {} — {}", section.category, section.title, section.guide);
        for product in &section.products {
            println!("  → {}", product.name);
        }
    }
    if !dashboard.recent_histories.is_empty() {
        println!("Recent analyses:");
        for entry in &dashboard.recent_histories {
            println!("  #{} {} {}", entry.analysis_id, entry.date, entry.skin_type);
        }
    }
}

fn print_usage() {
    println!("skincheck <command>");
    println!();
    println!("  login <email> <password>");
    println!("  signup <name> <email> <password> [--gender M|F] [--birth-year <year>] [--concern <label>]...");
    println!("  resend-verify <email>");
    println!("  logout");
    println!("  whoami");
    println!("  home");
    println!("  history [YYYY-MM-DD]");
    println!("  analyze <image-path>");
    println!("  insight <analysis-id>");
}
