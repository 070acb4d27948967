use anyhow::Result;
use day1::max_group_sum;
use util::read_input_for_day;

fn main() -> Result<()> {
    let lines = read_input_for_day(1)?;

    let max = max_group_sum(lines.iter().map(String::as_str))?;

    println!("{max}");

    Ok(())
}
