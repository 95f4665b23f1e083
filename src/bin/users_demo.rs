use colored::Colorize;
use cs_fundamentals::config::{load_demo_config, UsersDemo};
use cs_fundamentals::logging;
use cs_fundamentals::users::{introduce_all, AdminUser, Introduce, User};
use std::process::ExitCode;

fn run(config: &UsersDemo) -> cs_fundamentals::Result<()> {
    println!("{}", "=== Users ===".bold());

    let mut user = User::new(config.user_name.as_str(), config.user_age);
    println!("{}", user.introduction());
    println!("Age: {}", user.age());

    user.set_age(config.updated_age)?;
    println!("Age after update: {}", user.age());

    if let Err(err) = user.set_age(0) {
        println!("{} {err}", "rejected:".yellow());
    }

    let admin = AdminUser::new(
        config.admin_name.as_str(),
        config.admin_age,
        config.admin_privileges.iter().cloned(),
    );
    println!("{}", admin.introduction());

    println!("\n{}", "=== Dynamic dispatch ===".bold());
    let people: [&dyn Introduce; 2] = [&user, &admin];
    for line in introduce_all(&people) {
        println!("{line}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = match load_demo_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.log_level);

    match run(&config.users) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
