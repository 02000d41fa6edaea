/// Tips that apply to every resource
const GENERAL_TIPS: [&str; 3] = [
    "💰 Set up billing alerts to avoid surprises",
    "📈 Use reserved instances for predictable workloads",
    "🎯 Implement auto-scaling to match demand",
];

/// Number of general tips appended after the resource-specific ones
const GENERAL_TIPS_SHOWN: usize = 2;

fn resource_tips(resource_id: &str) -> &'static [&'static str] {
    match resource_id {
        "vm" => &[
            "💡 Use spot instances for non-critical workloads (up to 90% savings)",
            "⏰ Schedule VMs to shut down during off-hours",
            "📊 Right-size instances based on actual usage patterns",
        ],
        "database" => &[
            "📚 Use read replicas for read-heavy workloads",
            "🔄 Consider serverless database options for variable workloads",
            "🗜️ Enable automatic scaling based on demand",
        ],
        "storage" => &[
            "📦 Archive old data to cheaper storage tiers",
            "🗜️ Enable compression and deduplication",
            "🔄 Implement lifecycle policies for automated management",
        ],
        "cdn" => &[
            "🌍 Optimize cache settings to reduce origin requests",
            "🗜️ Enable compression for text-based content",
            "📊 Monitor cache hit ratios and optimize accordingly",
        ],
        "load_balancer" => &[
            "⚖️ Use application-aware load balancing",
            "🔄 Implement health checks to avoid unhealthy instances",
            "📊 Monitor request patterns for optimal scaling",
        ],
        "lambda" => &[
            "⚡ Optimize function memory allocation",
            "🔄 Use provisioned concurrency for consistent performance",
            "📊 Monitor function duration and optimize code",
        ],
        "api_gateway" => &[
            "🚀 Implement caching to reduce backend calls",
            "🔐 Use API keys and throttling effectively",
            "📊 Monitor API usage patterns",
        ],
        "monitoring" => &[
            "📊 Use custom metrics only when necessary",
            "⏰ Adjust log retention periods appropriately",
            "🔍 Focus monitoring on critical business metrics",
        ],
        _ => &[],
    }
}

/// Optimization tips for a resource, followed by general advice
///
/// Unknown resources still get the general tips.
pub fn optimization_tips(resource_id: &str) -> Vec<&'static str> {
    resource_tips(resource_id)
        .iter()
        .chain(GENERAL_TIPS.iter().take(GENERAL_TIPS_SHOWN))
        .copied()
        .collect()
}
