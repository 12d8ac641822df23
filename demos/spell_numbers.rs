use num2words_uz::*;
use rust_decimal_macros::dec;

fn main() -> Result<()> {
    for script in [Script::Latin, Script::Cyrillic] {
        let uz = UzbekFormatter::new(script);
        println!("== {script} ==");

        for n in [0, 12, 23, 105, 1000, 1_000_000, -44] {
            println!("{n:>10}  {}", uz.to_cardinal(n)?);
        }

        println!();
        for n in [1, 5, 21, 100, 1000] {
            println!("{n:>10}  {}  /  {}", uz.to_ordinal(n)?, uz.to_ordinal_num(n)?);
        }

        println!();
        for year in [1984, 2023, -44] {
            println!("{year:>10}  {}", uz.to_year(year, None, true)?);
        }

        println!();
        for amount in [dec!(2000.00), dec!(1001.01), dec!(158.30)] {
            println!("{amount:>10}  {}", uz.to_currency(amount, "UZS")?);
        }

        // Currencies without local forms need a fallback
        match uz.to_currency(dec!(10), "EUR") {
            Ok(text) => println!("{text}"),
            Err(e) => println!("EUR: {e}"),
        }
        println!();
    }
    Ok(())
}
