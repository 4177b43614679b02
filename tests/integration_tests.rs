use chrono::NaiveDate;
use spending_planner::*;
use std::fs::File;
use std::io::Write;

fn export_to_csv(
    table: &BalanceTable,
    filename: &str,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;

    write!(file, "Row")?;
    for column in &table.columns {
        write!(file, ",{}", column.key)?;
    }
    writeln!(file)?;

    for row in &table.rows {
        write!(file, "{}", row.label)?;
        for value in &row.values {
            write!(file, ",{:.2}", value)?;
        }
        writeln!(file)?;
    }

    let aggregates: [(&str, &Vec<f64>); 4] = [
        ("Total Income", &table.totals.total_income),
        ("Total Spent", &table.totals.total_spending),
        ("Net Week", &table.totals.net),
        ("Balance", &table.totals.running_balance),
    ];
    for (label, values) in aggregates {
        write!(file, "{}", label)?;
        for value in values.iter() {
            write!(file, ",{:.2}", value)?;
        }
        writeln!(file)?;
    }

    Ok(())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_household_month_scenario() {
    // One January of weekly pay against a weekly bill and a one-off expense.
    let config = SpendingPlanConfig {
        income: vec![IncomeEntry {
            amount: 1000.0,
            frequency: Frequency::Weekly,
            start_date: date(2025, 1, 1),
            end_date: None,
            repeat_count: Some(3),
        }],
        spending: vec![
            SpendingEntry {
                amount: 200.0,
                frequency: Frequency::Weekly,
                start_date: date(2025, 1, 8),
                end_date: None,
                repeat_count: Some(2),
                category: Category::Bill,
            },
            SpendingEntry {
                amount: 150.0,
                frequency: Frequency::OneTime,
                start_date: date(2025, 1, 20),
                end_date: None,
                repeat_count: None,
                category: Category::Other,
            },
        ],
    };

    let table = process_spending_plan(&config).unwrap().unwrap();

    export_to_csv(&table, "test_household_month.csv").unwrap();

    // January 2025 spans five Sunday-start weeks, Dec 29 through Feb 1.
    assert_eq!(table.num_columns(), 5);
    assert_eq!(table.months.len(), 1);
    assert_eq!(table.months[0].label(), "January 2025");

    let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Income #1.1", "Spent #1.1 (bill)", "Spent #2.1 (other)"]
    );

    assert_eq!(table.rows[0].values, vec![1000.0, 1000.0, 1000.0, 0.0, 0.0]);
    assert_eq!(table.rows[1].values, vec![0.0, 200.0, 200.0, 0.0, 0.0]);
    assert_eq!(table.rows[2].values, vec![0.0, 0.0, 0.0, 150.0, 0.0]);

    assert_eq!(table.totals.net, vec![1000.0, 800.0, 800.0, -150.0, 0.0]);
    assert_eq!(
        table.totals.running_balance,
        vec![1000.0, 1800.0, 2600.0, 2450.0, 2450.0]
    );
    assert_eq!(table.totals.final_balance(), 2450.0);

    println!("✓ Household month test passed - output: test_household_month.csv");
}

#[test]
fn test_quarter_spanning_plan() {
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
        ],
    };

    let table = process_spending_plan(&config).unwrap().unwrap();

    export_to_csv(&table, "test_quarter_plan.csv").unwrap();

    // Jan emits 5 weeks, Feb and Mar 4 each.
    assert_eq!(table.num_columns(), 13);
    assert_eq!(table.months.len(), 3);
    assert_eq!(table.months[0].span, 5);
    assert_eq!(table.months[1].span, 4);
    assert_eq!(table.months[2].span, 4);

    // Seven paychecks (Jan 3 through Mar 28), three rents, three subs.
    assert_eq!(table.totals.overall_income(), 10_500.0);
    assert_eq!(table.totals.overall_spending(), 2775.0);
    assert_eq!(table.totals.final_balance(), 7725.0);

    // Rent paid on Feb 1 lands in January's fifth column (Jan 26 - Feb 1),
    // and the Mar 1 rent in February's last (Feb 23 - Mar 1).
    let rent = &table.rows[1];
    assert_eq!(rent.label, "Spent #1.1 (bill)");
    assert_eq!(rent.values[0], 900.0);
    assert_eq!(rent.values[4], 900.0);
    assert_eq!(rent.values[8], 900.0);

    assert_eq!(table.totals.net[0], 600.0);

    println!("✓ Quarter plan test passed - output: test_quarter_plan.csv");
}

#[test]
fn test_adjacent_bill_submissions_compact() {
    // Two one-off bills in neighboring weeks end up sharing a single row
    // after the lift, without changing any totals.
    let config = SpendingPlanConfig {
        income: vec![IncomeEntry {
            amount: 500.0,
            frequency: Frequency::OneTime,
            start_date: date(2025, 1, 6),
            end_date: None,
            repeat_count: None,
        }],
        spending: vec![
            SpendingEntry {
                amount: 60.0,
                frequency: Frequency::OneTime,
                start_date: date(2025, 1, 6),
                end_date: None,
                repeat_count: None,
                category: Category::Bill,
            },
            SpendingEntry {
                amount: 40.0,
                frequency: Frequency::OneTime,
                start_date: date(2025, 1, 15),
                end_date: None,
                repeat_count: None,
                category: Category::Bill,
            },
        ],
    };

    let table = process_spending_plan(&config).unwrap().unwrap();

    assert_eq!(table.num_rows(), 2);
    assert_eq!(table.rows[0].label, "Income #1.1");
    assert_eq!(table.rows[1].label, "Spent #1.1 (bill)");
    assert_eq!(table.rows[1].values, vec![0.0, 60.0, 40.0, 0.0, 0.0]);

    assert_eq!(table.totals.overall_spending(), 100.0);
    assert_eq!(table.totals.final_balance(), 400.0);
}

#[test]
fn test_sporadic_gigs_share_one_row() {
    // Two gigs under one submission, five months apart. The gap threshold
    // splits them into separate rows, then the lift folds the second row
    // back into the first's zero slots and the emptied row is dropped.
    let gigs = vec![
        Transaction::new(1, date(2025, 1, 8), 400.0, Category::Income),
        Transaction::new(1, date(2025, 6, 10), 650.0, Category::Income),
    ];

    let table = build_balance_table(&gigs, &[]).unwrap();

    assert_eq!(table.months.len(), 6);
    assert_eq!(table.num_columns(), 26);

    // Jan 8 sits in column 1, Jun 10 in column 23.
    assert_eq!(table.num_rows(), 1);
    assert_eq!(table.rows[0].label, "Income #1.1");
    assert_eq!(table.rows[0].values[1], 400.0);
    assert_eq!(table.rows[0].values[23], 650.0);

    assert_eq!(table.totals.final_balance(), 1050.0);
}

#[test]
fn test_config_from_json_end_to_end() {
    let json = r#"{
        "income": [
            {
                "amount": 2000.0,
                "frequency": "monthly",
                "start_date": "2025-01-31",
                "repeat_count": 2
            }
        ],
        "spending": [
            {
                "amount": 75.5,
                "frequency": "one-time",
                "start_date": "2025-02-14",
                "category": "debt"
            }
        ]
    }"#;

    let config = SpendingPlanConfig::from_json(json).unwrap();
    let table = process_spending_plan(&config).unwrap().unwrap();

    assert_eq!(table.num_columns(), 9);

    // The second payday clamps from Jan 31 to Feb 28 and lands in
    // February's last column.
    let income_row = &table.rows[0];
    assert_eq!(income_row.values[4], 2000.0);
    assert_eq!(income_row.values[8], 2000.0);

    assert_eq!(table.totals.overall_income(), 4000.0);
    assert_eq!(table.totals.overall_spending(), 75.5);
    assert_eq!(table.totals.final_balance(), 3924.5);
}

#[test]
fn test_schema_generation() {
    let schema_json = SpendingPlanConfig::schema_as_json().unwrap();

    let mut file = File::create("schema_output.json").unwrap();
    file.write_all(schema_json.as_bytes()).unwrap();

    assert!(schema_json.contains("income"));
    assert!(schema_json.contains("spending"));
    assert!(schema_json.contains("Frequency"));
    assert!(schema_json.contains("Category"));
    assert!(schema_json.contains("repeat_count"));

    println!("✓ Schema generation test passed - output: schema_output.json");
}
