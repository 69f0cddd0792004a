mod handlers;
pub mod parse;

use clap::Parser;
pub use handlers::{Input, load, options, parse_labels};
pub use parse::Cli;

use crate::core::error::Error;

pub fn run() -> Result<(), Error> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Spark(a) => handlers::spark(&a),
        parse::Command::Bar(a) => handlers::bar(&a),
        parse::Command::Line(a) => handlers::line(&a),
        parse::Command::Pie(a) => handlers::pie(&a),
        parse::Command::Themes => {
            handlers::themes();
            Ok(())
        }
        parse::Command::Demo(a) => handlers::demo(&a),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
