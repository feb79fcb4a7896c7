use sensorview::{ChartHandle, ChartSurface, Sensorview, SeriesPoint};

// The station's published spreadsheet CSV export.
const FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRWCl1SexRqaXBFHYwWMLz2NjeZ0JlHmSRa2Ia_XUz974vGK8a74QgBqfhZRGxKkEzDGn1JdD1sDLpq/pub?gid=0&single=true&output=csv";

struct ConsoleChart {
    label: String,
}

impl ChartHandle for ConsoleChart {
    fn refresh(&mut self) {
        println!("refreshing chart '{}'", self.label);
    }
}

struct ConsoleSurface;

impl ChartSurface for ConsoleSurface {
    type Handle = ConsoleChart;

    fn render(&mut self, label: &str, points: &[SeriesPoint], color: &str) -> ConsoleChart {
        let gaps = points.iter().filter(|p| p.value.is_none()).count();
        println!(
            "{label} [{color}]: {} points ({gaps} gaps), {} .. {}",
            points.len(),
            points.first().map(|p| p.label.as_str()).unwrap_or("-"),
            points.last().map(|p| p.label.as_str()).unwrap_or("-"),
        );
        ConsoleChart {
            label: label.to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let client = Sensorview::new(FEED_URL);
    let mut surface = ConsoleSurface;

    let charts = client.run().surface(&mut surface).call().await?;
    println!("rendered {} charts", charts.len());
    Ok(())
}
