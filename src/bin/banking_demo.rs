use colored::Colorize;
use cs_fundamentals::banking::{process_monthly_maintenance, transfer, Account, BankError};
use cs_fundamentals::config::{load_demo_config, BankingDemo};
use cs_fundamentals::logging;
use std::process::ExitCode;

fn report(result: Result<f64, BankError>) {
    match result {
        Ok(balance) => println!("  ok, balance now ${balance:.2}"),
        Err(err) => println!("  {} {err}", "declined:".yellow()),
    }
}

fn run(config: &BankingDemo) -> cs_fundamentals::Result<()> {
    println!("{}\n", "===== BANKING SYSTEM DEMO =====".bold());

    let mut savings = Account::savings(
        config.savings_holder.as_str(),
        config.savings_number.as_str(),
        config.savings_initial_deposit,
        config.interest_rate,
    )?;
    let mut checking = Account::checking(
        config.checking_holder.as_str(),
        config.checking_number.as_str(),
        config.checking_initial_deposit,
        config.overdraft_limit,
    )?;

    println!("{}", "--- Initial Setup ---".cyan());
    println!("{}", savings.summary());
    println!("{}", checking.summary());

    println!("\n{}", "--- Transactions ---".cyan());
    println!("Deposit ${:.2} to {}", config.deposit, savings.holder());
    report(savings.deposit(config.deposit));
    println!("Check to {} for ${:.2}", config.check_payee, config.check_amount);
    report(checking.write_check(&config.check_payee, config.check_amount));

    println!("\n{}", "--- Transfer Between Accounts ---".cyan());
    match transfer(&mut savings, &mut checking, config.transfer_amount) {
        Ok(()) => println!(
            "  moved ${:.2} from {} to {}",
            config.transfer_amount,
            savings.holder(),
            checking.holder()
        ),
        Err(err) => println!("  {} {err}", "declined:".yellow()),
    }

    println!("\n{}", "--- Withdrawal Limit Test (Savings) ---".cyan());
    for attempt in 1..=config.withdrawal_attempts {
        println!("Withdrawal attempt {attempt}:");
        report(savings.withdraw(config.withdrawal_amount));
    }

    println!("\n{}", "--- Overdraft Test (Checking) ---".cyan());
    report(checking.withdraw(config.overdraft_withdrawal));

    for account in [&mut savings, &mut checking] {
        println!("\n{}", process_monthly_maintenance(account));
    }

    println!("\n{}", "--- Transaction History ---".cyan());
    for account in [&savings, &checking] {
        println!(
            "{}'s transactions: {} transactions",
            account.holder(),
            account.transactions().len()
        );
        for transaction in account.transactions() {
            println!("  {transaction}");
        }
    }

    println!("\n{}", "--- Statement (JSON) ---".cyan());
    println!("{}", savings.statement_json()?);
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

    match run(&config.banking) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
