use std::env;
use std::path::PathBuf;

use metricboard_core::DashboardInfo;
use metricboard_report::write_report;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let mut input: Option<PathBuf> = None;
    let mut out_dir: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => out_dir = args.next().map(PathBuf::from),
            _ => {
                if input.is_none() {
                    input = Some(PathBuf::from(arg));
                } else {
                    return Err("unexpected argument".into());
                }
            }
        }
    }

    let input = input.ok_or("missing dashboard.json path")?;
    let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("reports/example"));

    let payload = std::fs::read_to_string(&input)?;
    let info: DashboardInfo = serde_json::from_str(&payload)?;

    let paths = write_report(&out_dir, &info, chrono::Utc::now())?;
    println!("dashboard_path={}", paths.dashboard_path.display());
    println!("report_path={}", paths.report_path.display());
    Ok(())
}
