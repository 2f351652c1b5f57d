//! Walkthrough of the environment detectors

use isit::{Detector, FixedPlatform, HostOs, UserAgentPlatform};

fn main() {
    println!("Current process (host platform):");
    let host = Detector::host();
    println!("   is_browser = {}", host.is_browser());
    println!("   is_windows = {}", host.is_windows());
    println!("   is_mac     = {}", host.is_mac());
    println!("   is_iphone  = {}", host.is_iphone());
    println!("   is_weixin  = {}", host.is_weixin());

    println!("\nClassifying client user agents:");
    let agents = [
        (
            "Windows Chrome",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
        ),
        (
            "Mac Safari",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15",
        ),
        (
            "iPhone Safari",
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148",
        ),
        (
            "WeChat on iPhone",
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) MicroMessenger/8.0.42",
        ),
    ];
    for (label, agent) in agents {
        let detector = Detector::new(UserAgentPlatform::new(agent));
        println!(
            "   {label}: windows={} mac={} iphone={} weixin={}",
            detector.is_windows(),
            detector.is_mac(),
            detector.is_iphone(),
            detector.is_weixin()
        );
    }

    println!("\nFixed facts for tests and embedders:");
    let detector = Detector::new(FixedPlatform::new().with_host_os(HostOs::Windows));
    println!(
        "   non-browser Windows host: is_windows={} is_browser={}",
        detector.is_windows(),
        detector.is_browser()
    );
}
