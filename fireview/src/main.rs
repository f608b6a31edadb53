#![allow(clippy::cast_possible_truncation)]

mod options;

use anyhow::{anyhow, Error as AnyError};
use clap::Parser;
use firemap::{
    elevprof::{Client, ProfileSeries},
    rastile::{decode_tile, Whiteout},
    splitview::{PixelPt, PixelRect, ViewBox},
    AffectedZones, LayerSet, Viewer,
};
use geo::geometry::Coord;
use options::{Cli, Command, PixelOrigin, ProfileFormat, ProfilePath, ViewSize};
use serde::Serialize;
use std::path::Path;
use textplots::{Chart, Plot, Shape};

fn main() -> Result<(), AnyError> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Whiteout {
            input,
            output,
            luma_min,
            spread_max,
        } => whiteout(&input, &output, luma_min, spread_max),
        Command::TileUrl {
            layers,
            date,
            lat,
            lon,
            zoom,
        } => tile_url(&layers, &date, lat, lon, zoom),
        Command::Zones { file, hide } => zones(&file, &hide),
        Command::Compare {
            layers,
            left,
            right,
            fraction,
            view,
            origin,
        } => compare(&layers, &left, &right, fraction, view, origin),
        Command::Profile {
            endpoint,
            path,
            sources,
            samples,
            format,
        } => profile(&endpoint, &path, &sources, samples, &format),
    }
}

fn whiteout(input: &Path, output: &Path, luma_min: f32, spread_max: u8) -> Result<(), AnyError> {
    let bytes = std::fs::read(input)?;
    let mut image = decode_tile(&bytes)?;
    let filter = Whiteout {
        luma_min,
        spread_max,
    };
    filter.apply(&mut image);
    image.save(output)?;
    Ok(())
}

fn tile_url(layers_file: &Path, date: &str, lat: f64, lon: f64, zoom: u8) -> Result<(), AnyError> {
    let viewer = Viewer::new(load_layers(layers_file)?, viewport(1000.0, 600.0, 0.0, 0.0));
    let url = viewer.tile_url(date, Coord { x: lon, y: lat }, zoom)?;
    println!("{url}");
    Ok(())
}

fn zones(file: &Path, hide: &[String]) -> Result<(), AnyError> {
    let json = std::fs::read_to_string(file)?;
    let zones = AffectedZones::from_json(&json)?;
    let hidden: Vec<&str> = hide.iter().map(String::as_str).collect();
    for zone in zones.iter() {
        println!("{}", zone.popup_text(&hidden));
    }
    Ok(())
}

fn compare(
    layers_file: &Path,
    left: &str,
    right: &str,
    fraction: f64,
    view: ViewSize,
    origin: PixelOrigin,
) -> Result<(), AnyError> {
    if left == right {
        return Err(anyhow!("left and right layers must differ"));
    }

    let ViewSize(width, height) = view;
    let PixelOrigin(x, y) = origin;
    let mut viewer = Viewer::new(load_layers(layers_file)?, viewport(width, height, x, y));

    for date in [left, right] {
        if !viewer.layers().is_visible(date)? {
            viewer.toggle_layer(date)?;
        }
    }
    viewer.compare_select(left)?;
    viewer.compare_select(right)?;
    viewer.compare_start()?;
    let clip = viewer.set_divider(fraction)?;

    let json = serde_json::json!({
        "left": rect_json(&clip.left),
        "right": rect_json(&clip.right),
        "handleX": clip.handle_x,
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn profile(
    endpoint: &str,
    path: &ProfilePath,
    sources: &[String],
    samples: usize,
    format: &ProfileFormat,
) -> Result<(), AnyError> {
    let client = Client::new(endpoint);
    let series = client.profiles(&path.0, sources, samples)?;
    match format {
        ProfileFormat::Display => display(&series),
        ProfileFormat::Json => print_json(&series)?,
        ProfileFormat::Plot { out } => plot_svg(&series, out)?,
    }
    Ok(())
}

fn viewport(width: f64, height: f64, x: f64, y: f64) -> ViewBox {
    ViewBox {
        width,
        height,
        nw: PixelPt { x, y },
        se: PixelPt {
            x: x + width,
            y: y + height,
        },
    }
}

fn load_layers(file: &Path) -> Result<LayerSet, AnyError> {
    let json = std::fs::read_to_string(file)?;
    Ok(LayerSet::from_json(&json)?)
}

fn rect_json(rect: &PixelRect) -> serde_json::Value {
    serde_json::json!({
        "top": rect.top,
        "right": rect.right,
        "bottom": rect.bottom,
        "left": rect.left,
    })
}

/// Imagery sources carry a `_cog.tif` suffix that only matters to the
/// sampling service.
fn source_label(source: &str) -> &str {
    source.strip_suffix("_cog.tif").unwrap_or(source)
}

fn display(series: &[ProfileSeries]) {
    for profile in series {
        println!("{}", source_label(&profile.source));
        let points: Vec<(f32, f32)> = profile
            .points
            .iter()
            .map(|&(distance, elevation)| (distance as f32, elevation as f32))
            .collect();
        Chart::new(300, 150, 0.0, (profile.distance_span() as f32).max(1.0))
            .lineplot(&Shape::Lines(&points))
            .display();
    }
}

fn print_json(series: &[ProfileSeries]) -> Result<(), AnyError> {
    #[derive(Serialize)]
    struct JsonSample {
        distance: f64,
        elevation: f64,
    }

    #[derive(Serialize)]
    struct JsonSeries<'a> {
        source: &'a str,
        profile: Vec<JsonSample>,
    }

    let reshaped: Vec<JsonSeries> = series
        .iter()
        .map(|profile| JsonSeries {
            source: &profile.source,
            profile: profile
                .points
                .iter()
                .map(|&(distance, elevation)| JsonSample {
                    distance,
                    elevation,
                })
                .collect(),
        })
        .collect();
    println!("{}", serde_json::to_string(&reshaped)?);
    Ok(())
}

fn plot_svg(series: &[ProfileSeries], out: &Path) -> Result<(), AnyError> {
    use plotters::prelude::*;

    const SERIES_COLORS: [RGBColor; 5] = [
        RGBColor(0x2c, 0x7b, 0xe5),
        RGBColor(0xe7, 0x4c, 0x3c),
        RGBColor(0x27, 0xae, 0x60),
        RGBColor(0xf3, 0x9c, 0x12),
        RGBColor(0x9b, 0x59, 0xb6),
    ];

    let (min_elev, max_elev) = series
        .iter()
        .filter_map(ProfileSeries::elevation_bounds)
        .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)))
        .ok_or_else(|| anyhow!("every profile came back empty"))?;
    let pad = ((max_elev - min_elev) * 0.05).max(1.0);
    let max_distance = series
        .iter()
        .map(ProfileSeries::distance_span)
        .fold(0.0, f64::max)
        .max(1.0);

    let root = SVGBackend::new(out, (1024, 480)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..max_distance, (min_elev - pad)..(max_elev + pad))?;
    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Elevation (m)")
        .draw()?;

    for (idx, profile) in series.iter().enumerate() {
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
        chart
            .draw_series(LineSeries::new(profile.points.iter().copied(), &color))?
            .label(source_label(&profile.source))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], color));
    }
    chart.configure_series_labels().border_style(&BLACK).draw()?;
    root.present()?;
    Ok(())
}
