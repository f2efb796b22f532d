//! Terminal rendering of the attribution report.

use console::style;

use secretscope_core::{Consumer, ConsumerCategory};

pub fn announce(secret_id: &str, days_back: u32) {
    println!(
        "Listing all actual consumers of the secret '{secret_id}' based on AWS CloudTrail \
         events, filtering for read events in the last {days_back} days:"
    );
}

/// Print the report: consumers split into Human and Machine sections.
/// An empty result is a distinct, explicitly signaled state, not an error.
pub fn render(consumers: &[Consumer]) {
    if consumers.is_empty() {
        println!("{}", style("No consumers found in the query window.").yellow());
        return;
    }

    let (humans, machines): (Vec<&Consumer>, Vec<&Consumer>) = consumers
        .iter()
        .partition(|consumer| consumer.category == ConsumerCategory::Human);

    render_section("Human", &humans);
    render_section("Machine", &machines);
}

fn render_section(title: &str, consumers: &[&Consumer]) {
    if consumers.is_empty() {
        return;
    }

    println!("\n{}", style(format!("{title}:")).bold());
    for consumer in consumers {
        println!("{}", consumer_line(consumer));
    }
}

fn consumer_line(consumer: &Consumer) -> String {
    format!(
        "* {} (last read on {}) ({})",
        consumer.name,
        format_time(consumer.accessed_resource_at),
        consumer.kind
    )
}

fn format_time(ts: jiff::Timestamp) -> String {
    ts.strftime("%Y-%m-%d %H:%M:%S UTC").to_string()
}
