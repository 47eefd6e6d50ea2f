//! Console output helpers.

use console::style;

use crate::api::UserInfo;
use crate::config::Config;

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════╗
║     Douyin Downloader                         ║
║     抖音视频/图集/动图批量下载器              ║
╚═══════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print the effective configuration and target.
pub fn print_config_summary(config: &Config, target_url: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!(
        "  Media API: {}",
        config.media_api.as_deref().unwrap_or("(unset)")
    );
    println!(
        "  User API:  {}",
        config.user_api.as_deref().unwrap_or("(unset)")
    );
    println!("  Directory: {}", config.download_directory.display());
    println!("  Target:    {}", target_url);
    println!();
}

/// Print the separator header before a work is resolved.
pub fn print_work_header(share_url: &str) {
    println!();
    println!("{}", style("─".repeat(60)).dim());
    println!("Resolving work: {}", style(share_url).bold());
}

/// Print profile metadata once the first listing page arrives.
pub fn print_user_summary(nickname: &str, user: &UserInfo, works_count: Option<u64>) {
    println!();
    println!("{}", style(format!("User: {}", nickname)).bold());
    if let Some(uid) = &user.uid {
        println!("  UID: {}", uid);
    }
    if let Some(signature) = &user.signature {
        if !signature.is_empty() {
            println!("  Bio: {}", signature);
        }
    }
    if let Some(count) = works_count {
        println!("  Works: {}", count);
    }
}
