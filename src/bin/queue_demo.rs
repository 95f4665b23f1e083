use colored::Colorize;
use cs_fundamentals::config::load_demo_config;
use cs_fundamentals::{logging, Queue};
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

    println!("{}", "=== Queue ===".bold());

    let mut queue = Queue::with_capacity(config.queue.values.len());
    for value in &config.queue.values {
        println!("enqueue({value})");
        queue.enqueue(*value);
    }
    println!("Queue (front first): [{}]", queue.iter().join(", "));

    match queue.front() {
        Some(front) => println!("front() = {front}"),
        None => println!("front() = {}", "nothing queued".dimmed()),
    }

    match queue.dequeue() {
        Some(value) => println!("dequeue() = {value}"),
        None => println!("dequeue() = {}", "nothing queued".dimmed()),
    }
    println!("Remaining: {}", queue.len());

    ExitCode::SUCCESS
}
