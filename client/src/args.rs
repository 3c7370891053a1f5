use std::{convert::Infallible, time::Duration};

use clap::Parser;
use nourish_core::domain::{
    common::{DEFAULT_SERVICE_URL, NourishConfig, RecommendationServiceConfig},
    profile::entities::VegetarianChoice,
};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "nourish",
    version,
    about = "Personalized diet recommendations from your health profile"
)]
pub struct Args {
    #[command(flatten)]
    pub service: ServiceArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Also print the raw model response when the service returns one
    #[arg(long, env = "NOURISH_SHOW_RAW")]
    pub show_raw: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServiceArgs {
    /// Base URL of the recommendation service
    #[arg(
        long = "service-url",
        env = "NOURISH_SERVICE_URL",
        default_value = DEFAULT_SERVICE_URL
    )]
    pub url: String,

    #[arg(
        long = "request-timeout-secs",
        env = "NOURISH_REQUEST_TIMEOUT_SECS",
        default_value_t = 60
    )]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "NOURISH_LOG_JSON")]
    pub json: bool,
}

/// Profile fields given on the command line. Any of them switches the
/// client to one-shot mode.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub health_conditions: Option<String>,

    #[arg(long)]
    pub allergies: Option<String>,

    /// "yes" or "no"; any other value leaves the answer unset
    #[arg(long, value_parser = parse_vegetarian)]
    pub vegetarian: Option<VegetarianChoice>,
}

impl ProfileArgs {
    pub fn is_one_shot(&self) -> bool {
        self.health_conditions.is_some() || self.allergies.is_some() || self.vegetarian.is_some()
    }
}

fn parse_vegetarian(value: &str) -> Result<VegetarianChoice, Infallible> {
    value.parse()
}

impl From<Args> for NourishConfig {
    fn from(args: Args) -> Self {
        NourishConfig {
            recommendation_service: RecommendationServiceConfig {
                base_url: args.service.url,
                request_timeout: Duration::from_secs(args.service.request_timeout_secs),
            },
        }
    }
}
