use cs_fundamentals::banking::{
    process_monthly_maintenance, transfer, Account, BankError, FeeOutcome,
};
use cs_fundamentals::config::DemoConfig;
use cs_fundamentals::{LinkedList, Queue};

#[test]
fn stock_linked_list_demo() {
    let config = DemoConfig::default();
    let mut list = LinkedList::new();
    for value in &config.linked_list.values {
        list.insert_at_head(*value);
    }

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![20, 10]);
    assert_eq!(list.to_string(), "20\n10\n");
}

#[test]
fn stock_queue_demo() {
    let mut queue: Queue<i64> = DemoConfig::default().queue.values.into_iter().collect();
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.front(), Some(&2));
}

#[test]
fn stock_banking_demo() {
    let config = DemoConfig::default().banking;

    let mut savings = Account::savings(
        config.savings_holder.as_str(),
        config.savings_number.as_str(),
        config.savings_initial_deposit,
        config.interest_rate,
    )
    .unwrap();
    let mut checking = Account::checking(
        config.checking_holder.as_str(),
        config.checking_number.as_str(),
        config.checking_initial_deposit,
        config.overdraft_limit,
    )
    .unwrap();

    assert_eq!(savings.deposit(config.deposit), Ok(1500.0));
    assert_eq!(
        checking.write_check(&config.check_payee, config.check_amount),
        Ok(350.0)
    );

    transfer(&mut savings, &mut checking, config.transfer_amount).unwrap();
    assert_eq!(savings.balance(), 1200.0);
    assert_eq!(checking.balance(), 650.0);

    // The transfer already used one of six monthly withdrawals.
    let outcomes: Vec<_> = (0..config.withdrawal_attempts)
        .map(|_| savings.withdraw(config.withdrawal_amount))
        .collect();
    assert_eq!(outcomes.iter().filter(|o| o.is_ok()).count(), 5);
    assert_eq!(
        outcomes.last(),
        Some(&Err(BankError::WithdrawalLimitReached { limit: 6 }))
    );
    assert_eq!(savings.balance(), 950.0);

    assert_eq!(checking.withdraw(config.overdraft_withdrawal), Ok(50.0));

    let savings_report = process_monthly_maintenance(&mut savings);
    assert_eq!(savings_report.fee, FeeOutcome::Waived);
    assert!(savings_report.interest.unwrap() > 1.97);

    let checking_report = process_monthly_maintenance(&mut checking);
    assert_eq!(checking_report.fee, FeeOutcome::Charged(10.0));
    assert_eq!(checking.balance(), 40.0);

    assert_eq!(savings.transactions().len(), 9);
    assert_eq!(checking.transactions().len(), 5);
}
