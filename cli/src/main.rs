mod commands;
mod terminal;

use commands::{CommandLine, Commands, list, run};
use terminal::logging;
use tour_core::tour::Selection;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init(&cfg)?;

    match commands.command {
        None => run::run(Selection::All, &cfg),
        Some(Commands::Run { chapters }) => run::run(Selection::from_keys(chapters), &cfg),
        Some(Commands::List) => {
            list::list(&cfg);
            Ok(())
        }
    }
}
