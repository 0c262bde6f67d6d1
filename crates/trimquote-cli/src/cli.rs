use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;
use trimquote_common::{BaseboardRequest, EstimateRequest, HouseRequest, PricingError};
use trimquote_render::QuoteFormat;

#[derive(Parser, Debug)]
#[command(name = "trimquote", version, about = "Painting estimate calculator")]
pub struct Cli {
    #[arg(short, long, action = ArgAction::Count, global = true, help = "Increase log verbosity")]
    pub verbose: u8,
    #[arg(long, global = true, help = "TOML file with rate table and letterhead overrides")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Write quote files here instead of printing")]
    pub out_dir: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = FormatArg::All, global = true)]
    pub format: FormatArg,
    #[arg(long, global = true, help = "Print the price breakdown as JSON")]
    pub json: bool,
    #[arg(long, global = true, default_value = "")]
    pub client: String,
    #[arg(long, global = true, default_value = "", help = "Project name or address")]
    pub project: String,
    #[arg(long, global = true, help = "Quote date, YYYY-MM-DD (default: today)")]
    pub date: Option<NaiveDate>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Baseboard repaint priced per linear foot
    Baseboard {
        #[arg(long)]
        linear_feet: Decimal,
        #[arg(long, help = "light, medium, or heavy")]
        prep: String,
        #[arg(long = "add-on", help = "caulk, sanding, or quarter-round (repeatable)")]
        add_ons: Vec<String>,
    },
    /// Interior repaint priced by square footage
    House {
        #[arg(long, default_value_t = Decimal::ZERO)]
        walls: Decimal,
        #[arg(long, default_value_t = Decimal::ZERO)]
        ceilings: Decimal,
        #[arg(long, default_value_t = 0)]
        doors: u32,
        #[arg(long, default_value_t = 0)]
        frames: u32,
        #[arg(long, help = "light, medium, or heavy")]
        prep: String,
    },
}

impl Command {
    /// Validate raw arguments into a pricing request
    pub fn to_request(&self) -> Result<EstimateRequest, PricingError> {
        match self {
            Command::Baseboard {
                linear_feet,
                prep,
                add_ons,
            } => Ok(BaseboardRequest::parse(*linear_feet, prep, add_ons)?.into()),
            Command::House {
                walls,
                ceilings,
                doors,
                frames,
                prep,
            } => Ok(HouseRequest::new(*walls, *ceilings, prep.parse()?)
                .with_doors(*doors)
                .with_frames(*frames)
                .into()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Csv,
    Pdf,
    All,
}

impl FormatArg {
    pub fn formats(&self) -> Vec<QuoteFormat> {
        match self {
            FormatArg::Text => vec![QuoteFormat::Text],
            FormatArg::Csv => vec![QuoteFormat::Table],
            FormatArg::Pdf => vec![QuoteFormat::Document],
            FormatArg::All => QuoteFormat::ALL.to_vec(),
        }
    }
}
