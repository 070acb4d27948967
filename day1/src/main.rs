use anyhow::Result;
use day1::{max_group_sum, top_three_sum};
use util::read_input_for_day;

fn main() -> Result<()> {
    let lines = read_input_for_day(1)?;

    println!("{}", max_group_sum(lines.iter().map(String::as_str))?);
    println!("{}", top_three_sum(lines.iter().map(String::as_str))?);

    Ok(())
}
