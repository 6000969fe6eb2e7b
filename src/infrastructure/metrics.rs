// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawler_log::{RunSource, RunStatus};
use crate::domain::models::raw_record::ContentKind;
use anyhow::Context;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;

/// 启动 Prometheus 导出器并注册指标说明
///
/// 导出器自带 HTTP 监听，`/metrics` 不经过业务路由
pub fn init_metrics(listen: &str) -> anyhow::Result<()> {
    let addr: SocketAddr = listen
        .parse()
        .with_context(|| format!("invalid metrics listen address: {}", listen))?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .context("failed to install Prometheus recorder")?;

    describe_counter!("ingest_runs_total", "Ingestion runs by trigger and outcome");
    describe_counter!(
        "ingest_records_saved_total",
        "Content records written, by content kind"
    );
    describe_counter!(
        "ingest_records_filtered_total",
        "Raw records dropped by the content filter"
    );
    describe_counter!(
        "ingest_source_failures_total",
        "Source fetches that failed and contributed no records"
    );
    describe_histogram!("ingest_run_duration_seconds", "Wall time of one ingestion run");

    info!("Metrics exporter listening on {}", addr);
    Ok(())
}

pub fn record_run(source: RunSource, status: RunStatus, elapsed: Duration) {
    counter!(
        "ingest_runs_total",
        "trigger" => source.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("ingest_run_duration_seconds", "trigger" => source.to_string())
        .record(elapsed.as_secs_f64());
}

pub fn record_saved(kind: ContentKind, count: u64) {
    if count > 0 {
        counter!("ingest_records_saved_total", "kind" => kind.to_string()).increment(count);
    }
}

pub fn record_filtered(count: u64) {
    if count > 0 {
        counter!("ingest_records_filtered_total").increment(count);
    }
}

pub fn record_source_failure(source_name: &str) {
    counter!("ingest_source_failures_total", "source" => source_name.to_string()).increment(1);
}
