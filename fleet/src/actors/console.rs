use crate::artists::format_alert_details;
use crate::model::VehicleStatus;
use crate::traits::{ControlAlerts, ControlMap, DrawDashboard, RequestShutdown};
use commons::async_channel::{unbounded, Receiver};
use commons::async_trait::async_trait;
use commons::log::{debug, warn};
use commons::process::Step;
use std::io::{self, BufRead};
use std::str::FromStr;
use std::thread;

const USAGE: &str =
    "Commands: toggle <active|maintenance|inactive>, select <vehicle>, legend, alerts, close, open <n>, quit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    Toggle(VehicleStatus),
    Select(String),
    Legend,
    OpenAlerts,
    CloseAlerts,
    OpenAlert(usize),
    Quit,
}

impl FromStr for ConsoleCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<ConsoleCommand, String> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default();
        let argument = words.next();
        if words.next().is_some() {
            return Err(USAGE.to_string());
        }
        match (command, argument) {
            ("toggle", Some(status)) => Ok(ConsoleCommand::Toggle(status.parse()?)),
            ("select", Some(vehicle_id)) => Ok(ConsoleCommand::Select(vehicle_id.to_string())),
            ("legend", None) => Ok(ConsoleCommand::Legend),
            ("alerts", None) => Ok(ConsoleCommand::OpenAlerts),
            ("close", None) => Ok(ConsoleCommand::CloseAlerts),
            ("open", Some(number)) => match number.parse::<usize>() {
                Ok(number) if number > 0 => Ok(ConsoleCommand::OpenAlert(number)),
                _ => Err(format!("'{}' is not an alert number", number)),
            },
            ("quit", None) | ("exit", None) => Ok(ConsoleCommand::Quit),
            _ => Err(USAGE.to_string()),
        }
    }
}

/// Reads stdin on its own thread. The receiver closes at end of input.
pub fn stdin_lines() -> Receiver<String> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.try_send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    warn!("Error reading console input: {}", err);
                    break;
                }
            }
        }
    });
    rx
}

pub struct Console<T> {
    cx: T,
    lines: Receiver<String>,
    closed: bool,
}

impl<T> Console<T>
where
    T: ControlAlerts + ControlMap + DrawDashboard + RequestShutdown + Send + Sync,
{
    pub fn new(cx: T, lines: Receiver<String>) -> Console<T> {
        Console {
            cx,
            lines,
            closed: false,
        }
    }

    pub async fn handle_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        match line.parse() {
            Ok(command) => self.execute(command).await,
            Err(message) => self.cx.notify(&message),
        }
    }

    async fn open_alert(&mut self, number: usize) {
        let alert = match self.cx.alert(number - 1).await {
            Some(alert) => alert,
            None => {
                self.cx
                    .notify(&format!("No alert {} in the alert panel", number));
                return;
            }
        };
        if alert.id.trim().is_empty() {
            self.cx
                .notify(&format!("Alert {} has no id and cannot be resolved", number));
            return;
        }
        for line in format_alert_details(&alert, None) {
            self.cx.notify(&line);
        }
        self.cx.notify(&format!(
            "Resolve with: fleet resolve {} --by <name> --note <note>",
            alert.id
        ));
    }

    async fn execute(&mut self, command: ConsoleCommand) {
        match command {
            ConsoleCommand::Toggle(status) => self.cx.toggle_status(status).await,
            ConsoleCommand::Select(vehicle_id) => {
                if !self.cx.select_path(vehicle_id.clone()).await {
                    self.cx
                        .notify(&format!("No path available for vehicle {}", vehicle_id));
                }
            }
            ConsoleCommand::Legend => {
                let legend = self.cx.legend().await;
                self.cx.draw_legend(&legend);
            }
            ConsoleCommand::OpenAlerts => self.cx.open_alerts().await,
            ConsoleCommand::CloseAlerts => self.cx.close_alerts().await,
            ConsoleCommand::OpenAlert(number) => self.open_alert(number).await,
            ConsoleCommand::Quit => self.cx.request_shutdown(),
        }
    }
}

#[async_trait]
impl<T> Step for Console<T>
where
    T: ControlAlerts + ControlMap + DrawDashboard + RequestShutdown + Send + Sync,
{
    async fn step(&mut self) {
        if self.closed {
            futures::future::pending::<()>().await;
        }
        match self.lines.recv().await {
            Ok(line) => self.handle_line(&line).await,
            Err(_) => {
                debug!("Console input closed");
                self.closed = true;
                self.cx.request_shutdown();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::map::{legend, LegendEntry, MapLayer, StatusFilter};
    use crate::model::Alert;
    use commons::Arm;
    use futures::executor::block_on;

    #[derive(Default)]
    struct Cx {
        toggled: Arm<Vec<VehicleStatus>>,
        paths: Vec<String>,
        alerts: Vec<Alert>,
        panel_open: Arm<bool>,
        legends: Arm<Vec<Vec<LegendEntry>>>,
        notices: Arm<Vec<String>>,
        shutdown: Arm<bool>,
    }

    #[async_trait]
    impl ControlMap for Cx {
        async fn toggle_status(&self, status: VehicleStatus) {
            self.toggled.lock().unwrap().push(status);
        }

        async fn select_path(&self, vehicle_id: String) -> bool {
            self.paths.contains(&vehicle_id)
        }

        async fn legend(&self) -> Vec<LegendEntry> {
            legend(&StatusFilter::default())
        }
    }

    #[async_trait]
    impl ControlAlerts for Cx {
        async fn open_alerts(&self) {
            *self.panel_open.lock().unwrap() = true;
        }

        async fn close_alerts(&self) {
            *self.panel_open.lock().unwrap() = false;
        }

        async fn alert(&self, index: usize) -> Option<Alert> {
            self.alerts.get(index).cloned()
        }
    }

    impl DrawDashboard for Cx {
        fn draw_map(&self, _: &MapLayer) {}

        fn draw_legend(&self, legend: &[LegendEntry]) {
            self.legends.lock().unwrap().push(legend.to_vec());
        }

        fn draw_alert_badge(&self, _: u64) {}

        fn draw_alert_panel(&self, _: &[Alert]) {}

        fn notify(&self, message: &str) {
            self.notices.lock().unwrap().push(message.to_string());
        }
    }

    impl RequestShutdown for Cx {
        fn request_shutdown(&self) {
            *self.shutdown.lock().unwrap() = true;
        }
    }

    fn console(cx: Cx) -> Console<Cx> {
        let (_, lines) = unbounded();
        Console::new(cx, lines)
    }

    #[test]
    fn parse_commands() {
        assert_eq!(
            "toggle Maintenance".parse::<ConsoleCommand>(),
            Ok(ConsoleCommand::Toggle(VehicleStatus::Maintenance))
        );
        assert_eq!(
            "select V-1".parse::<ConsoleCommand>(),
            Ok(ConsoleCommand::Select("V-1".to_string()))
        );
        assert_eq!("alerts".parse::<ConsoleCommand>(), Ok(ConsoleCommand::OpenAlerts));
        assert_eq!("open 2".parse::<ConsoleCommand>(), Ok(ConsoleCommand::OpenAlert(2)));
        assert_eq!("quit".parse::<ConsoleCommand>(), Ok(ConsoleCommand::Quit));
    }

    #[test]
    fn reject_bad_commands() {
        assert!("toggle parked".parse::<ConsoleCommand>().is_err());
        assert!("open 0".parse::<ConsoleCommand>().is_err());
        assert!("select".parse::<ConsoleCommand>().is_err());
        assert!("legend now".parse::<ConsoleCommand>().is_err());
        assert!("fly".parse::<ConsoleCommand>().is_err());
    }

    #[test]
    fn toggle_is_sent_to_map() {
        // Given
        let mut console = console(Cx::default());

        // When
        block_on(console.handle_line("toggle active"));

        // Then
        assert_eq!(
            *console.cx.toggled.lock().unwrap(),
            vec![VehicleStatus::Active]
        );
    }

    #[test]
    fn selecting_vehicle_without_path_notifies() {
        // Given
        let mut console = console(Cx {
            paths: vec!["V-1".to_string()],
            ..Cx::default()
        });

        // When
        block_on(console.handle_line("select V-1"));
        block_on(console.handle_line("select V-2"));

        // Then
        assert_eq!(
            *console.cx.notices.lock().unwrap(),
            vec!["No path available for vehicle V-2".to_string()]
        );
    }

    #[test]
    fn legend_is_drawn() {
        let mut console = console(Cx::default());

        block_on(console.handle_line("legend"));

        assert_eq!(console.cx.legends.lock().unwrap()[0].len(), 3);
    }

    fn alert(id: &str, message: &str) -> Alert {
        Alert {
            id: id.to_string(),
            alert_type: Some("Engine".to_string()),
            severity: Some("High".to_string()),
            message: Some(message.to_string()),
            ..Alert::default()
        }
    }

    #[test]
    fn open_alert_is_one_based_and_shows_details() {
        // Given
        let mut console = console(Cx {
            alerts: vec![alert("a1", "Overheating"), alert("a2", "Low oil")],
            ..Cx::default()
        });

        // When
        block_on(console.handle_line("alerts"));
        block_on(console.handle_line("open 2"));

        // Then
        assert!(*console.cx.panel_open.lock().unwrap());
        assert_eq!(
            *console.cx.notices.lock().unwrap(),
            vec![
                "Resolve Alert".to_string(),
                "  Type: Engine".to_string(),
                "  Severity: High".to_string(),
                "  Message: Low oil".to_string(),
                "Resolve with: fleet resolve a2 --by <name> --note <note>".to_string(),
            ]
        );
    }

    #[test]
    fn alert_without_id_cannot_be_opened() {
        // Given
        let mut console = console(Cx {
            alerts: vec![alert("", "Overheating")],
            ..Cx::default()
        });

        // When
        block_on(console.handle_line("open 1"));

        // Then
        assert_eq!(
            *console.cx.notices.lock().unwrap(),
            vec!["Alert 1 has no id and cannot be resolved".to_string()]
        );
    }

    #[test]
    fn opening_missing_alert_notifies() {
        let mut console = console(Cx::default());

        block_on(console.handle_line("open 3"));

        assert_eq!(
            *console.cx.notices.lock().unwrap(),
            vec!["No alert 3 in the alert panel".to_string()]
        );
    }

    #[test]
    fn blank_line_is_ignored() {
        let mut console = console(Cx::default());

        block_on(console.handle_line("   "));

        assert!(console.cx.notices.lock().unwrap().is_empty());
    }

    #[test]
    fn end_of_input_requests_shutdown() {
        // Given
        let (tx, lines) = unbounded();
        let mut console = Console::new(Cx::default(), lines);
        tx.try_send("toggle inactive".to_string()).unwrap();
        drop(tx);

        // When
        block_on(console.step());
        block_on(console.step());

        // Then
        assert_eq!(
            *console.cx.toggled.lock().unwrap(),
            vec![VehicleStatus::Inactive]
        );
        assert!(*console.cx.shutdown.lock().unwrap());
    }

    #[test]
    fn quit_requests_shutdown() {
        let mut console = console(Cx::default());

        block_on(console.handle_line("quit"));

        assert!(*console.cx.shutdown.lock().unwrap());
    }
}
