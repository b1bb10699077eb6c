use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "carray-demo")]
#[command(version, about = "Walks a DynamicArray through add, insert, remove and shrink", long_about = None)]
pub struct Cli {
    /// Initial number of elements, filled with i * 2
    #[arg(long, default_value_t = 5)]
    pub size: usize,

    /// Growth increment used when the array reallocates
    #[arg(long, default_value_t = 5)]
    pub grow: usize,

    /// Set verbose level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
