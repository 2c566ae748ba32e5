use std::collections::HashMap;
use std::time::Duration;

use iced::Subscription;

use sensordash_common::DashboardConfig;

use crate::message::Message;
use crate::mock;

/// Create a subscription delivering simulated sensor readings.
///
/// The stream first yields one history batch per configured sensor, then
/// periodically yields one reading per sensor, each continuing its random
/// walk from the end of that sensor's history.
pub fn feed_subscription(config: DashboardConfig) -> Subscription<Message> {
    Subscription::run_with(config, move |config| {
        let config = config.clone();
        async_stream::stream! {
            use rand::SeedableRng;

            if config.sensors.is_empty() {
                yield Message::FeedFailed("no sensors configured".to_string());
                return;
            }

            // Use a Send-compatible RNG (seeded from system entropy)
            let mut rng = rand::rngs::SmallRng::from_os_rng();

            yield Message::FeedStarted;

            let now = now_secs();
            let mut current: HashMap<String, f64> = HashMap::new();

            for sensor in &config.sensors {
                let samples = mock::history(&sensor.name, now, config.history_len, &mut rng);
                if let Some(last) = samples.last() {
                    current.insert(sensor.name.clone(), last.value);
                }
                yield Message::HistoryLoaded {
                    name: sensor.name.clone(),
                    samples,
                };
            }

            let interval = Duration::from_secs(config.interval_secs.max(1));
            loop {
                tokio::time::sleep(interval).await;

                let time = now_secs();
                for sensor in &config.sensors {
                    let model = mock::sensor_model(&sensor.name);
                    let previous = current
                        .get(&sensor.name)
                        .copied()
                        .unwrap_or(model.baseline);
                    let value = mock::step(previous, &model, &mut rng);
                    current.insert(sensor.name.clone(), value);

                    yield Message::SampleReceived {
                        name: sensor.name.clone(),
                        time,
                        value,
                    };
                }
            }
        }
    })
}

/// Create a tick subscription for periodic UI updates.
pub fn tick_subscription() -> Subscription<Message> {
    iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick)
}

/// Current Unix time in seconds (fractional).
fn now_secs() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
