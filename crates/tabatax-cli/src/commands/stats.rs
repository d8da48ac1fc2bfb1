use tabatax_core::workout::format_clock;
use tabatax_core::Database;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let stats = db.stats_all()?;

    println!("Runs completed:  {}", stats.total_runs);
    println!("Work intervals:  {}", stats.total_work_units);
    println!(
        "Time trained:    {}",
        format_clock(stats.total_secs.min(u32::MAX as u64) as u32)
    );
    println!("Runs today:      {}", stats.today_runs);

    let recent = db.recent_runs(5)?;
    if !recent.is_empty() {
        println!();
        println!("Recent runs:");
        for run in recent {
            println!(
                "  {}  {} sets x {} exercises, {}",
                run.finished_at.format("%Y-%m-%d %H:%M"),
                run.sets,
                run.exercises,
                format_clock(run.total_secs),
            );
        }
    }
    Ok(())
}
