use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use mobscan_core::domain::{check_number, NumberCheck};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Phone numbers to check; formatting characters are ignored
    #[arg(required = true)]
    pub numbers: Vec<String>,
}

pub fn check(ctx: &Context<'_>, args: CheckArgs) -> Result<()> {
    let checks: Vec<NumberCheck> = args
        .numbers
        .iter()
        .map(|number| check_number(number))
        .collect();

    if ctx.json {
        return print_json(&checks);
    }

    for check in &checks {
        let status = if check.valid { "valid" } else { "invalid" };
        println!("{}\t{}\t{}", status, check.digits, check.input);
    }
    Ok(())
}
