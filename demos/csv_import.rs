use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use spending_planner::*;

// One row per submission: kind, amount, frequency, start, optional end,
// optional repeat count, category (spending only).
const PLAN_CSV: &str = "\
kind,amount,frequency,start_date,end_date,repeat_count,category
income,1500.00,bi-weekly,2025-01-03,2025-03-31,,
spending,900.00,monthly,2025-01-01,2025-03-31,,bill
spending,25.00,monthly,2025-01-10,,3,sub
spending,300.00,one-time,2025-02-14,,,debt
";

fn main() -> Result<()> {
    let config = parse_plan_csv(PLAN_CSV)?;

    println!(
        "Parsed {} income and {} spending submissions from CSV",
        config.income.len(),
        config.spending.len()
    );

    let table = process_spending_plan(&config)?
        .context("plan produced no transactions")?;

    println!(
        "Table spans {} columns across {} months:",
        table.num_columns(),
        table.months.len()
    );
    for group in &table.months {
        println!("  {} ({} weeks)", group.label(), group.span);
    }

    println!("\nRows:");
    for row in &table.rows {
        println!("  {:<24} total {:>10.2}", row.label, row.sum());
    }

    println!("\nTotal income:   {:>10.2}", table.totals.overall_income());
    println!("Total spending: {:>10.2}", table.totals.overall_spending());
    println!("Final balance:  {:>10.2}", table.totals.final_balance());

    Ok(())
}

fn parse_plan_csv(data: &str) -> Result<SpendingPlanConfig> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let mut config = SpendingPlanConfig::default();

    for (idx, result) in reader.records().enumerate() {
        let row = idx + 2; // header is line 1
        let record = result.with_context(|| format!("reading CSV line {}", row))?;

        let field = |i: usize| record.get(i).unwrap_or("").to_string();

        let amount: f64 = field(1)
            .parse()
            .with_context(|| format!("bad amount on line {}", row))?;
        let frequency = parse_frequency(&field(2))?;
        let start_date = parse_date(&field(3))
            .with_context(|| format!("bad start date on line {}", row))?;
        let end_date = match field(4).as_str() {
            "" => None,
            s => Some(parse_date(s).with_context(|| format!("bad end date on line {}", row))?),
        };
        let repeat_count = match field(5).as_str() {
            "" => None,
            s => Some(
                s.parse()
                    .with_context(|| format!("bad repeat count on line {}", row))?,
            ),
        };

        match field(0).as_str() {
            "income" => config.income.push(IncomeEntry {
                amount,
                frequency,
                start_date,
                end_date,
                repeat_count,
            }),
            "spending" => config.spending.push(SpendingEntry {
                amount,
                frequency,
                start_date,
                end_date,
                repeat_count,
                category: parse_category(&field(6))?,
            }),
            other => bail!("unknown kind '{}' on line {}", other, row),
        }
    }

    Ok(config)
}

fn parse_frequency(s: &str) -> Result<Frequency> {
    match s {
        "one-time" => Ok(Frequency::OneTime),
        "weekly" => Ok(Frequency::Weekly),
        "bi-weekly" => Ok(Frequency::BiWeekly),
        "monthly" => Ok(Frequency::Monthly),
        other => bail!("unknown frequency '{}'", other),
    }
}

fn parse_category(s: &str) -> Result<Category> {
    match s {
        "income" => Ok(Category::Income),
        "debt" => Ok(Category::Debt),
        "bill" => Ok(Category::Bill),
        "sub" => Ok(Category::Sub),
        "other" | "" => Ok(Category::Other),
        unknown => bail!("unknown category '{}'", unknown),
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("parsing date '{}'", s))
}
