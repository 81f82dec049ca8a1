//! menukit demo
//!
//! A two-page grocery menu exercising styles, navigation, and command
//! bindings with zero, one, and two arguments. Navigate with `a`/`d` or
//! the arrow keys, select with numbers, quit with Ctrl+C.

use std::process::ExitCode;

use clap::Parser;
use serde_json::json;

use menukit::{Args, MenuError, StdConsole, Style, Ui};

#[derive(Parser)]
#[command(name = "menukit")]
#[command(about = "Demo menu: two pages of groceries with bound commands")]
#[command(version)]
struct Cli {
    /// Pause after a command runs so its output stays visible
    #[arg(long)]
    stop: bool,

    /// Menu title shown in the header
    #[arg(long, default_value = "menukit demo")]
    name: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run_demo(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_demo(cli: Cli) -> Result<(), MenuError> {
    let mut ui = Ui::new(cli.name);

    let fruits = ui.add_page("Fruits");
    fruits.add_element("Banana", Style::YELLOW).bind(|_| {
        println!("hello from the banana");
        Ok(())
    });
    fruits.add_element("Apple", Style::RED_BRIGHT).bind_with(
        |args| {
            let a = args.first().and_then(|v| v.as_i64()).unwrap_or(0);
            let b = args.get(1).and_then(|v| v.as_i64()).unwrap_or(0);
            println!("{} + {} = {}", a, b, a + b);
            Ok(())
        },
        Args::Many(vec![json!(2), json!(3)]),
    );
    fruits.add_element("Orange", Style::SELECTED).bind_with(
        |args| {
            for value in args {
                println!("{}", value);
            }
            Ok(())
        },
        Args::One(json!("freshly squeezed")),
    );

    let groceries = ui.add_page("Groceries");
    groceries.add_element("Bread", Style::REGULAR);
    groceries.add_element("Milk", Style::UNDERSCORE);

    ui.run(&mut StdConsole::new(), cli.stop)
}
