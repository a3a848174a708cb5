use chrono::{DateTime, Utc};

use viewer_api::ServerStatus;
use viewer_core::{MediaVariant, PreviewSource, SessionView, ViewRecord};

pub fn print_page(records: &[ViewRecord]) {
    if records.is_empty() {
        println!("(no feeds)");
        return;
    }
    for record in records {
        print_record(record);
    }
}

fn print_record(record: &ViewRecord) {
    let mut header = format!("@{} {}", record.user_name, format_time(record.feed_at));
    if let Some(retweeted_by) = &record.retweeted_by {
        header.push_str(&format!(
            "  (retweeted by @{} {})",
            retweeted_by.user_name,
            format_time(retweeted_by.retweet_at)
        ));
    }
    if record.is_reply {
        header.push_str("  [reply]");
    }
    println!("{header}");
    println!("  {}", record.contents.replace('\n', "\n  "));
    for media in &record.media {
        let label = match media.variant {
            MediaVariant::ImageThumb => "image",
            MediaVariant::VideoThumb => "video",
            MediaVariant::DeletedPlaceholder => "deleted",
        };
        let preview = match &media.preview {
            PreviewSource::Inline(_) => "(inline thumbnail)".to_string(),
            PreviewSource::Url(url) => url.clone(),
        };
        println!("  [{label}] {}  preview: {preview}", media.file_url);
    }
    println!("  {}", record.twitter_url);
    println!();
}

pub fn print_session(view: &SessionView) {
    let mut filters = Vec::new();
    if let Some(user_name) = &view.query.user_name {
        filters.push(format!("user=@{user_name}"));
    }
    if let Some(keyword) = &view.query.keyword {
        filters.push(format!("keyword={keyword:?}"));
    }
    if view.query.has_media_only {
        filters.push("media-only".to_string());
    }
    let filters = if filters.is_empty() {
        "no filters".to_string()
    } else {
        filters.join(", ")
    };
    println!(
        "-- page {} ({}) prev:{} next:{}",
        view.query.page + 1,
        filters,
        mark(view.has_previous),
        mark(view.has_next),
    );
}

pub fn print_status(status: &ServerStatus) {
    println!(
        "data_dir: {}\nbind_address: {}\ntime_offset: {}h\nscanning: {} ({}/{})",
        status.data_dir,
        status.bind_address,
        status.time_offset,
        status.is_scanning,
        status.scanner_count,
        status.scanner_count_limit,
    );
}

fn mark(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn format_time(timestamp: i64) -> String {
    match DateTime::<Utc>::from_timestamp(timestamp, 0) {
        Some(datetime) => datetime.format("%Y/%m/%d %H:%M:%S").to_string(),
        None => timestamp.to_string(),
    }
}
