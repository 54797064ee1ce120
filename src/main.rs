use reqwest::Client;

use cleanprobe::check::install::install_check;
use cleanprobe::check::report;
use cleanprobe::check::settings::settings_check;
use cleanprobe::config::app_config::load_config;
use cleanprobe::config::model::CheckVariant;
use cleanprobe::timezone::{ValueField, fill_default_timezone};
use cleanprobe::ui::console::ConsoleUi;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let app = load_config();
    let max_site_width = app.max_site_width;

    let mut offset_field = ValueField::default();
    fill_default_timezone(&mut offset_field);
    println!("Suggested default timezone offset: {}s", offset_field.value);

    let client = Client::builder()
        .timeout(app.probe_timeout)
        .user_agent("cleanprobe/1.0")
        .build()
        .expect("Failed to create client");

    let mut handles = vec![];

    for (site, site_config) in app.config {
        let client = client.clone();

        handles.push(tokio::spawn(async move {
            let mut ui = ConsoleUi::new(&site, max_site_width);

            for page in &site_config.pages {
                let location = page.location();
                let result = match page.check {
                    CheckVariant::Settings => {
                        settings_check(&client, &location, &site_config.messages, &mut ui).await
                    }
                    CheckVariant::Install => {
                        install_check(&client, &location, &site_config.messages, &mut ui).await
                    }
                };

                match result {
                    Ok(r) => log::info!(
                        "[{site}] {}: success={}, status {:?}, elapsed {:.2}ms",
                        r.url,
                        r.outcome.is_success(),
                        r.http_status,
                        r.http_time * 1000.0
                    ),
                    Err(e) => println!("[{site}] ❌ Invalid probe target: {}", report(&e)),
                }
            }
        }));
    }

    for handle in handles {
        let _ = handle.await;
    }
}
