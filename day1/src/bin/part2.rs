use anyhow::Result;
use day1::top_three_sum;
use util::read_input_for_day;

fn main() -> Result<()> {
    let lines = read_input_for_day(1)?;

    let total = top_three_sum(lines.iter().map(String::as_str))?;

    println!("{total}");

    Ok(())
}
