use chrono::{Duration, NaiveDate};
use std::f64::consts::PI;

/// Busiest subdistricts, most complaints first.
pub const TOP_SUBDISTRICTS: [&str; 10] = [
    "วังทองหลาง",
    "ลาดพร้าว",
    "สายไหม",
    "บางนา",
    "ดินแดง",
    "คลองตัน",
    "บางกะปิ",
    "สามเสนใน",
    "คลองเตย",
    "จตุจักร",
];

pub const COMPLAINT_TYPES: [&str; 17] = [
    "ถนน",
    "ความสะอาด",
    "แสงสว่าง",
    "ทางเท้า",
    "ต้นไม้",
    "กีดขวาง",
    "ท่อระบายน้ำ",
    "น้ำท่วม",
    "สายไฟ",
    "จราจร",
    "สัตว์จรจัด",
    "เสียงรบกวน",
    "คลอง",
    "PM2.5",
    "ความปลอดภัย",
    "ป้าย",
    "สะพาน",
];

const TOP_SUBDISTRICT_TOTALS: [f64; 10] = [
    12450.0, 11230.0, 10890.0, 9870.0, 9120.0, 8560.0, 8210.0, 7980.0, 7650.0, 7320.0,
];

const COMPLAINT_TYPE_TOTALS: [f64; 17] = [
    45000.0, 28000.0, 18000.0, 15000.0, 12000.0, 10000.0, 8000.0, 7000.0, 6000.0, 5000.0,
    4000.0, 3000.0, 2500.0, 1500.0, 800.0, 600.0, 600.0,
];

const SUNBURST_ROOT: &str = "Total";
const SUNBURST_ROOT_TOTAL: f64 = 165000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SubdistrictTotal {
    pub name: &'static str,
    pub complaints: f64,
}

pub fn top_subdistricts() -> Vec<SubdistrictTotal> {
    TOP_SUBDISTRICTS
        .into_iter()
        .zip(TOP_SUBDISTRICT_TOTALS)
        .map(|(name, complaints)| SubdistrictTotal { name, complaints })
        .collect()
}

/// Flat two-level hierarchy for a sunburst: every complaint type hangs off a single root.
#[derive(Debug, Clone, PartialEq)]
pub struct Sunburst {
    pub labels: Vec<&'static str>,
    pub parents: Vec<&'static str>,
    pub values: Vec<f64>,
}

pub fn complaint_type_sunburst() -> Sunburst {
    let mut labels = vec![SUNBURST_ROOT];
    let mut parents = vec![""];
    let mut values = vec![SUNBURST_ROOT_TOTAL];

    for (label, value) in COMPLAINT_TYPES.into_iter().zip(COMPLAINT_TYPE_TOTALS) {
        labels.push(label);
        parents.push(SUNBURST_ROOT);
        values.push(value);
    }

    Sunburst { labels, parents, values }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyPoint {
    pub date: String,
    pub complaints: f64,
}

pub const TREND_DAYS: i64 = 400;

fn trend_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 5, 1).unwrap_or_default()
}

/// Deterministic stand-in for noise, in `[0, 1]`.
fn pseudo_random(seed: f64) -> f64 {
    seed.sin() * 0.5 + 0.5
}

/// Daily complaint counts: linear trend, yearly seasonality and pseudo-noise, floored at zero.
pub fn generate_daily_series() -> Vec<DailyPoint> {
    let start = trend_start();

    (0..TREND_DAYS)
        .map(|i| {
            let day = i as f64;
            let trend = day * 0.1;
            let seasonal = 20.0 * (day * 2.0 * PI / 365.0).sin();
            let noise = pseudo_random(day * 12.9898) * 30.0 - 15.0;

            DailyPoint {
                date: (start + Duration::days(i)).format("%Y-%m-%d").to_string(),
                complaints: (50.0 + trend + seasonal + noise).max(0.0),
            }
        })
        .collect()
}

/// Complaints per type (columns) for each of the top subdistricts (rows).
pub fn complaint_heatmap() -> Vec<Vec<f64>> {
    const ROWS: [[f64; 17]; 10] = [
        [850.0, 320.0, 280.0, 180.0, 150.0, 120.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0, 15.0, 10.0, 8.0],
        [780.0, 310.0, 260.0, 170.0, 140.0, 110.0, 85.0, 75.0, 65.0, 55.0, 48.0, 38.0, 28.0, 18.0, 13.0, 9.0, 7.0],
        [720.0, 290.0, 240.0, 160.0, 130.0, 100.0, 80.0, 70.0, 60.0, 50.0, 45.0, 35.0, 25.0, 16.0, 12.0, 8.0, 6.0],
        [680.0, 270.0, 220.0, 150.0, 120.0, 95.0, 75.0, 65.0, 55.0, 48.0, 42.0, 33.0, 23.0, 15.0, 11.0, 7.0, 5.0],
        [650.0, 260.0, 210.0, 145.0, 115.0, 90.0, 72.0, 62.0, 52.0, 45.0, 40.0, 31.0, 22.0, 14.0, 10.0, 7.0, 5.0],
        [620.0, 250.0, 200.0, 140.0, 110.0, 88.0, 70.0, 60.0, 50.0, 43.0, 38.0, 30.0, 21.0, 13.0, 9.0, 6.0, 4.0],
        [590.0, 240.0, 190.0, 135.0, 105.0, 85.0, 68.0, 58.0, 48.0, 41.0, 36.0, 28.0, 20.0, 12.0, 9.0, 6.0, 4.0],
        [560.0, 230.0, 180.0, 130.0, 100.0, 82.0, 66.0, 56.0, 46.0, 39.0, 34.0, 27.0, 19.0, 11.0, 8.0, 5.0, 4.0],
        [530.0, 220.0, 175.0, 125.0, 98.0, 80.0, 64.0, 54.0, 44.0, 37.0, 33.0, 26.0, 18.0, 11.0, 8.0, 5.0, 3.0],
        [510.0, 210.0, 170.0, 122.0, 95.0, 78.0, 62.0, 52.0, 43.0, 36.0, 32.0, 25.0, 17.0, 10.0, 7.0, 5.0, 3.0],
    ];
    ROWS.iter().map(|row| row.to_vec()).collect()
}

pub const NETWORK_SIZE: usize = 8;
const EDGE_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkNode {
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityNetwork {
    pub nodes: Vec<NetworkNode>,
    /// Node index pairs, `i < j`
    pub edges: Vec<(usize, usize)>,
}

impl SimilarityNetwork {
    /// Edge coordinates in Plotly's line-segment form, each segment closed by a gap.
    pub fn edge_segments(&self) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
        let mut xs = Vec::with_capacity(self.edges.len() * 3);
        let mut ys = Vec::with_capacity(self.edges.len() * 3);
        for &(i, j) in &self.edges {
            let (a, b) = (&self.nodes[i], &self.nodes[j]);
            xs.extend([Some(a.x), Some(b.x), None]);
            ys.extend([Some(a.y), Some(b.y), None]);
        }
        (xs, ys)
    }
}

/// Subdistricts on a unit circle, linked where a deterministic hash of the pair clears a threshold.
pub fn similarity_network() -> SimilarityNetwork {
    let n = NETWORK_SIZE;
    let nodes: Vec<NetworkNode> = TOP_SUBDISTRICTS[..n]
        .iter()
        .copied()
        .enumerate()
        .map(|(i, name)| {
            let angle = i as f64 * 2.0 * PI / n as f64;
            NetworkNode {
                name,
                x: angle.cos(),
                y: angle.sin(),
                size: 20.0 + i as f64 * 3.0,
            }
        })
        .collect();

    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if pseudo_random((i * n + j) as f64) > EDGE_THRESHOLD {
                edges.push((i, j));
            }
        }
    }

    SimilarityNetwork { nodes, edges }
}

pub const CUBE_MONTHS: usize = 12;
pub const CUBE_SUBDISTRICTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubePoint {
    pub month: usize,
    pub subdistrict: usize,
    pub complaints: f64,
}

/// Month x subdistrict grid for the 3D scatter.
pub fn complaint_cube() -> Vec<CubePoint> {
    let mut points = Vec::with_capacity(CUBE_MONTHS * CUBE_SUBDISTRICTS);
    for month in 0..CUBE_MONTHS {
        for subdistrict in 0..CUBE_SUBDISTRICTS {
            let seed = (month * CUBE_SUBDISTRICTS + subdistrict) as f64;
            points.push(CubePoint {
                month,
                subdistrict,
                complaints: 50.0 + pseudo_random(seed) * 100.0 + month as f64 * 5.0,
            });
        }
    }
    points
}
