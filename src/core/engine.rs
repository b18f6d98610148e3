use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct TimetableEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> TimetableEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting remedial timetable generation");

        tracing::info!("Extracting timetable text...");
        let document = self.pipeline.extract().await?;
        tracing::info!(
            "Extracted {} characters from {}",
            document.text.len(),
            document.name
        );
        self.monitor.log_stats("Extract");

        tracing::info!("Building remedial schedule...");
        let timetable = self.pipeline.transform(document).await?;
        tracing::info!(
            "Scheduled {} remedial slots with {} faculty members",
            timetable.rows.len(),
            timetable.roster.len()
        );
        self.monitor.log_stats("Transform");

        tracing::info!("Writing remedial timetable...");
        let output_path = self.pipeline.load(timetable).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
