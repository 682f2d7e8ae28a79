//! Shows how the normal form follows the balance of ones and zeros.

use truth_table_rs::table::TruthTable;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    // Majority of three: four ones, four zeros.
    let rows: [[u8; 4]; 8] = [
        [0, 0, 0, 0],
        [1, 1, 1, 1],
        [1, 1, 0, 1],
        [0, 0, 1, 0],
        [1, 0, 1, 1],
        [0, 1, 1, 1],
        [0, 1, 0, 0],
        [1, 0, 0, 0],
    ];

    let mut table = TruthTable::new(3)?;
    for row in &rows {
        table.add_row(row)?;
        let probe = [row[0] == 1, row[1] == 1, row[2] == 1];
        let value = table.check(&probe)?;
        println!(
            "after {:?}: form = {}, ones = {}, zeros = {}, f = {}, check = {}",
            row,
            table.normal_form(),
            table.ones(),
            table.zeros(),
            table,
            value
        );
    }

    println!("cache = {:?}", table.cache_stats());

    Ok(())
}
