use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::models::registration::RegistrationForm;

#[derive(Parser)]
#[command(author, version, about = "Virtual power plant resource dashboard")]
pub struct Cli {
    /// Path to a TOML config file (backend endpoint, fetch policy, category scheme)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip the network and use an unavailable in-memory backend
    #[arg(long, global = true)]
    pub offline: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print per-city statistics, largest total capacity first
    Stats {
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print the per-city chart series as JSON
    Chart,

    /// Print the customer list with contact details masked
    Customers {
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Register a new resource, then print the refreshed statistics
    Register(RegisterArgs),
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub company_name: String,

    #[arg(long)]
    pub province: String,

    #[arg(long)]
    pub city: String,

    #[arg(long, default_value = "")]
    pub address: String,

    /// Capacity in MW; unparseable input counts as 0
    #[arg(long, default_value = "0.00")]
    pub capacity: String,

    /// One of 光伏, 储能, 充电桩, 其他
    #[arg(long, default_value = "光伏")]
    pub demand_type: String,

    /// Qualifier stored as "其他-<text>" when the demand type is 其他
    #[arg(long)]
    pub demand_type_other: Option<String>,

    /// Availability window, e.g. "14:00-18:00"
    #[arg(long, default_value = "14:00-18:00")]
    pub available_time: String,

    #[arg(long, default_value = "")]
    pub industry: String,

    #[arg(long)]
    pub contact_name: String,

    #[arg(long)]
    pub contact_phone: String,

    #[arg(long, default_value = "")]
    pub contact_email: String,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl From<RegisterArgs> for RegistrationForm {
    fn from(args: RegisterArgs) -> Self {
        RegistrationForm {
            company_name: args.company_name,
            province: args.province,
            city: args.city,
            address: args.address,
            capacity: args.capacity,
            demand_type: args.demand_type,
            demand_type_other: args.demand_type_other,
            available_time: args.available_time,
            industry_type: args.industry,
            contact_name: args.contact_name,
            contact_phone: args.contact_phone,
            contact_email: args.contact_email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn register_args_map_to_form() {
        let cli = Cli::try_parse_from([
            "vpp-dashboard",
            "--offline",
            "register",
            "--company-name",
            "绿能科技",
            "--province",
            "广东",
            "--city",
            "佛山",
            "--capacity",
            "3.2",
            "--demand-type",
            "其他",
            "--demand-type-other",
            "需求响应",
            "--contact-name",
            "王五",
            "--contact-phone",
            "13700002222",
        ])
        .unwrap();
        assert!(cli.offline);

        let Commands::Register(args) = cli.command else {
            panic!("expected register command");
        };
        let form = RegistrationForm::from(args);
        assert_eq!(form.city, "佛山");
        assert_eq!(form.resolved_demand_type(), "其他-需求响应");
        assert_eq!(form.available_time, "14:00-18:00");
    }
}
