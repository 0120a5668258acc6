use colored::{ColoredString, Colorize};
use simple_logger::SimpleLogger;
use std::env;

mod config;

use config::{Config, PayloadKind};
use weverse_feed_objects::{LiveBroadcast, Medialike, Notification, PostType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new().with_level(log::LevelFilter::Info).env().with_timestamp_format(
        time::macros::format_description!("[hour]:[minute]:[second]")
    ).init()?;
    // Get arguments
    let config = Config::from_args(env::args().collect())?;
    let payload = config.load_payload()?;

    if config.raw {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }

    match config.kind {
        PayloadKind::Notification => {
            print_notification(&Notification::try_from(payload)?);
        }
        PayloadKind::Page => {
            let notifications = Notification::from_page(payload)?;
            log::info!(
                target: "main",
                "Decoded {} notifications",
                notifications.len().to_string().bright_green()
            );
            for notification in &notifications {
                print_notification(notification);
            }
        }
        PayloadKind::Live => {
            print_live(&LiveBroadcast::try_from(payload)?);
        }
    }
    Ok(())
}

fn print_notification(notification: &Notification) {

    //  Get colored name of a post type
    fn get_colored_type(post_type: PostType) -> ColoredString {
        let name = post_type.to_string();
        match post_type {
            PostType::Live => name.bright_red(),
            PostType::Notice | PostType::Birthday => name.bright_yellow(),
            PostType::Unclassified => name.dimmed(),
            kind if kind.is_comment() => name.bright_blue(),
            _ => name.bright_purple(),
        }
    }

    let read_marker = if notification.is_read { " ".normal() } else { "*".bright_green() };
    let post_type = match notification.post_type() {
        Ok(post_type) => get_colored_type(post_type),
        Err(e) => {
            log::warn!(target: "main", "Notification {} has no post type: {}", notification.id, e);
            "?".dimmed()
        }
    };
    let post_id = notification.post_id().unwrap_or_else(|_| "-".to_string());
    let created = notification
        .created_at()
        .map(|time| time.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();

    println!(
        "{} [{}] {} {} <{}> {}",
        read_marker,
        created.bright_black(),
        post_type,
        post_id.bright_cyan(),
        notification.title.bright_green(),
        notification.message_en
    );
    if let Some(author_id) = notification.author_id() {
        println!("    author {}", author_id.bright_magenta());
    }
    log::debug!(
        target: "main",
        "Notification {} in community {} ({} artist comments)",
        notification.id, notification.community_id, notification.count
    );
}

fn print_live(live: &LiveBroadcast) {
    println!(
        "* {} {} ({} chat messages)",
        live.id().bright_cyan(),
        live.title().bright_green(),
        live.message_count.to_string().bright_yellow()
    );
    if let Some(thumbnail) = live.thumbnail_url() {
        println!("    thumbnail {}", thumbnail);
    }
}
