mod cli;

use anyhow::{Context, Result};
use carray::DynamicArray;
use cli::Cli;
use log::debug;

fn main() {
    let cli = Cli::parse_args();
    env_logger::builder().filter_level(cli.log_level()).init();

    if let Err(err) = run(&cli) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut arr = DynamicArray::with_increment(cli.size, cli.grow);
    debug!("created: size {}, capacity {}", arr.size(), arr.capacity());

    for i in 0..arr.size() {
        arr[i] = (i as i64) * 2;
    }

    arr.add(10);
    debug!("add(10): size {}, capacity {}", arr.size(), arr.capacity());

    arr.insert_at(2, 15).context("insert_at(2, 15) failed")?;
    arr.remove_at(1).context("remove_at(1) failed")?;
    arr.set_at(3, 100).context("set_at(3, 100) failed")?;

    arr.free_extra();
    debug!("free_extra: size {}, capacity {}", arr.size(), arr.capacity());

    print!("Array contents: ");
    for i in 0..arr.size() {
        print!("{} ", arr.get_at(i)?);
    }
    println!();

    println!("Upper Bound: {}", arr.upper_bound());
    println!("Is Empty: {}", if arr.is_empty() { "Yes" } else { "No" });

    Ok(())
}
