use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use nourish_client::{
    application::terminal::runner::{
        display_notifications, exit_status, run_interactive, run_once,
    },
    args::{Args, LogArgs},
};
use nourish_core::{
    application::create_session, domain::common::NourishConfig,
    infrastructure::notification::ChannelNotifier,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(log: &LogArgs) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, anyhow::Error> {
    dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log);

    let (notifier, notifications) = ChannelNotifier::new();
    let session = create_session(NourishConfig::from(args.clone()), notifier)?;
    let display = tokio::spawn(display_notifications(notifications));

    let state = if args.profile.is_one_shot() {
        run_once(&session, &args.profile, args.show_raw).await
    } else {
        run_interactive(&session, args.show_raw).await?
    };

    let status = exit_status(&state, session.form().is_submittable());

    // Dropping the session closes the notification channel.
    drop(session);
    display.await?;

    Ok(ExitCode::from(status))
}
