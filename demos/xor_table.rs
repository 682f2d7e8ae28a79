use truth_table_rs::table::TruthTable;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut table = TruthTable::new(2)?;
    table.add_row(&[0, 0, 0])?;
    table.add_row(&[0, 1, 1])?;
    table.add_row(&[1, 0, 1])?;
    table.add_row(&[1, 1, 0])?;
    println!("table = {:?}", table);

    for a in [false, true] {
        for b in [false, true] {
            println!("xor({}, {}) = {}", a, b, table.check(&[a, b])?);
        }
    }
    println!("formula = {}", table);

    Ok(())
}
