use chrono::NaiveDate;
use spending_planner::*;

fn main() {
    println!("📊 Weekly Balance Table Demo\n");
    println!("Builds a three-month household plan and prints the resulting table:");
    println!("Sunday-start week columns grouped under month headers, one row per");
    println!("submission, and the four aggregate lines at the bottom.\n");

    let config = SpendingPlanConfig {
        income: vec![IncomeEntry {
            amount: 1500.0,
            frequency: Frequency::BiWeekly,
            start_date: date(2025, 1, 3),
            end_date: Some(date(2025, 3, 31)),
            repeat_count: None,
        }],
        spending: vec![
            SpendingEntry {
                amount: 900.0,
                frequency: Frequency::Monthly,
                start_date: date(2025, 1, 1),
                end_date: Some(date(2025, 3, 31)),
                repeat_count: None,
                category: Category::Bill,
            },
            SpendingEntry {
                amount: 25.0,
                frequency: Frequency::Monthly,
                start_date: date(2025, 1, 10),
                end_date: None,
                repeat_count: Some(3),
                category: Category::Sub,
            },
            SpendingEntry {
                amount: 300.0,
                frequency: Frequency::OneTime,
                start_date: date(2025, 2, 14),
                end_date: None,
                repeat_count: None,
                category: Category::Debt,
            },
        ],
    };

    println!("📋 Plan:");
    println!("  - $1500 paycheck every two weeks from Jan 3 through March");
    println!("  - $900 rent on the 1st of each month");
    println!("  - $25 streaming subscription on the 10th, three times");
    println!("  - $300 one-off debt repayment on Feb 14\n");

    match process_spending_plan(&config) {
        Ok(Some(table)) => {
            print_table(&table);

            println!("\n✅ Verification:");
            let income = table.totals.overall_income();
            let spending = table.totals.overall_spending();
            let balance = table.totals.final_balance();
            println!("  Total income:   ${:>10.2}", income);
            println!("  Total spending: ${:>10.2}", spending);
            println!("  Final balance:  ${:>10.2}", balance);
            println!(
                "  Balance matches income - spending: {}",
                (balance - (income - spending)).abs() < 1e-9
            );
        }
        Ok(None) => println!("No data yet"),
        Err(e) => eprintln!("❌ Error: {}", e),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn print_table(table: &BalanceTable) {
    print!("{:24}", "");
    for group in &table.months {
        let width = group.span * 10 - 1;
        print!("|{:^width$}", group.label(), width = width);
    }
    println!();

    print!("{:24}", "");
    for idx in 0..table.num_columns() {
        print!("|{:>9}", table.week_label(idx).unwrap_or_default());
    }
    println!();

    for row in &table.rows {
        print_line(&row.label, &row.values);
    }

    println!("{}", "-".repeat(24 + table.num_columns() * 10));
    print_line("Total Income", &table.totals.total_income);
    print_line("Total Spent", &table.totals.total_spending);
    print_line("Net Week", &table.totals.net);
    print_line("Balance", &table.totals.running_balance);
}

fn print_line(label: &str, values: &[f64]) {
    print!("{:<24}", label);
    for value in values {
        print!("|{:>9.2}", value);
    }
    println!();
}
