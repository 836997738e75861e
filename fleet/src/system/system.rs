use crate::actors::{AlertPoller, Console, MapArtist, PathFetcher, TelemetryPoller};
use crate::api::HttpClient;
use crate::artists::ConsoleCanvas;
use crate::map::{BaseMap, MapView};
use crate::parameters::Parameters;
use crate::services::BackgroundService;
use crate::system::Context;
use commons::async_channel::Receiver;
use commons::fn_sender::{fn_channel, FnSenderFuture};
use commons::log::{error, info};
use commons::poller::Poller;
use commons::process::Process;
use commons::tokio_util::sync::CancellationToken;
use futures::FutureExt;
use std::io;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::RwLock;

type Tick = Box<dyn FnMut() -> FnSenderFuture<()> + Send>;

pub struct System {
    cx: Context,
    processes: Processes,
}

struct Processes {
    alert_poller: Process<AlertPoller<Context>>,
    alert_count_timer: Process<Poller<Tick>>,
    console: Process<Console<Context>>,
    map_artist: Process<MapArtist<Context>>,
    path_fetcher: Process<PathFetcher<Context>>,
    telemetry_poller: Process<TelemetryPoller<Context>>,
    telemetry_timer: Process<Poller<Tick>>,
}

impl System {
    pub fn new(parameters: Parameters, api: HttpClient, console_lines: Receiver<String>) -> System {
        let (alert_poller_tx, alert_poller_rx) = fn_channel();
        let (_, alert_count_timer_rx) = fn_channel();
        let (_, console_rx) = fn_channel();
        let (map_artist_tx, map_artist_rx) = fn_channel();
        let (path_fetcher_tx, path_fetcher_rx) = fn_channel();
        let (telemetry_poller_tx, telemetry_poller_rx) = fn_channel();
        let (_, telemetry_timer_rx) = fn_channel();

        let cx = Context {
            alert_poller_tx,
            api: Arc::new(api),
            background_service: Arc::new(BackgroundService::new(Handle::current())),
            canvas: Arc::new(ConsoleCanvas::new(io::stdout())),
            map_artist_tx,
            parameters: Arc::new(parameters),
            path_fetcher_tx,
            paths: Arc::default(),
            shutdown: CancellationToken::new(),
            telemetry: Arc::new(RwLock::new(vec![])),
            telemetry_poller_tx,
        };

        let base = BaseMap::new(
            cx.parameters.dark_mode,
            cx.parameters.map.center,
            cx.parameters.map.zoom,
        );

        let telemetry_tx = cx.telemetry_poller_tx.clone_with_name("telemetry_timer");
        let telemetry_tick: Tick =
            Box::new(move || telemetry_tx.send_future(|poller| poller.poll().boxed()));

        let alert_count_tx = cx.alert_poller_tx.clone_with_name("alert_count_timer");
        let alert_count_tick: Tick = Box::new(move || {
            alert_count_tx.send_future(|alert_poller| alert_poller.poll_count().boxed())
        });

        System {
            processes: Processes {
                alert_poller: Process::new(
                    AlertPoller::new(cx.clone_with_name("alert_poller"), cx.shutdown.child_token()),
                    alert_poller_rx,
                ),
                alert_count_timer: Process::new(
                    Poller::new(
                        "alert_count",
                        cx.parameters.alert_count_interval,
                        alert_count_tick,
                    ),
                    alert_count_timer_rx,
                ),
                console: Process::new(
                    Console::new(cx.clone_with_name("console"), console_lines),
                    console_rx,
                ),
                map_artist: Process::new(
                    MapArtist::new(cx.clone_with_name("map_artist"), MapView::new(base)),
                    map_artist_rx,
                ),
                path_fetcher: Process::new(
                    PathFetcher::new(cx.clone_with_name("path_fetcher"), cx.shutdown.child_token()),
                    path_fetcher_rx,
                ),
                telemetry_poller: Process::new(
                    TelemetryPoller::new(
                        cx.clone_with_name("telemetry_poller"),
                        cx.shutdown.child_token(),
                    ),
                    telemetry_poller_rx,
                ),
                telemetry_timer: Process::new(
                    Poller::new("telemetry", cx.parameters.telemetry_interval, telemetry_tick),
                    telemetry_timer_rx,
                ),
            },
            cx,
        }
    }

    /// Cancelled when the console asks to quit or its input ends.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.cx.shutdown.clone()
    }

    pub async fn start(&mut self) {
        self.processes.start().await;
    }

    pub async fn stop(&mut self) {
        self.cx.shutdown.cancel();

        self.processes.pause().await;

        self.cx.background_service.wait_on_tasks().await;
    }

    /// Runs until shutdown is requested from the console or by Ctrl-C.
    pub async fn run(mut self) {
        self.start().await;
        info!("Fleet map running against {}", self.cx.api.base_url());

        let shutdown = self.shutdown_token();
        tokio::select! {
            _ = shutdown.cancelled() => info!("Console closed"),
            signal = tokio::signal::ctrl_c() => match signal {
                Ok(()) => info!("Interrupted"),
                Err(err) => error!("Could not listen for Ctrl-C: {}", err),
            },
        }

        self.stop().await;
        info!("Fleet map stopped");
    }
}

impl Processes {
    async fn start(&mut self) {
        self.map_artist.run_passive().await;
        self.path_fetcher.run_passive().await;
        self.telemetry_poller.run_passive().await;
        self.alert_poller.run_passive().await;

        self.telemetry_timer.run_active().await;
        self.alert_count_timer.run_active().await;
        self.console.run_active().await;
    }

    async fn pause(&mut self) {
        self.console.pause().await;
        self.alert_count_timer.pause().await;
        self.telemetry_timer.pause().await;

        self.alert_poller.pause().await;
        self.telemetry_poller.pause().await;
        self.path_fetcher.pause().await;
        self.map_artist.pause().await;
    }
}
