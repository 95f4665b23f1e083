use colored::Colorize;
use cs_fundamentals::config::load_demo_config;
use cs_fundamentals::{logging, LinkedList};
use itertools::Itertools;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match load_demo_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.log_level);

    println!("{}", "=== Singly Linked List ===".bold());

    let mut list = LinkedList::new();
    for value in &config.linked_list.values {
        println!("insert_at_head({value})");
        list.insert_at_head(*value);
    }

    // Usage: the list only enumerates; printing stays out here
    println!("\nContents (head first):");
    print!("{list}");
    println!("\nAs a sequence: [{}]", list.iter().join(", "));
    println!("Length: {}", list.len());

    let evens: Vec<_> = list.iter().filter(|v| *v % 2 == 0).collect();
    println!("Even values: {evens:?}");

    list.clear();
    println!("After clear: empty = {}", list.is_empty());

    ExitCode::SUCCESS
}
