use softgfx::config::{DemoConfig, TextLine};
use softgfx::display::{Display, FrameTexture, InputEvent, WindowOptions};
use softgfx::font::bdf::parse_bdf;
use softgfx::raster::{self, GradientStyle, Vertex};
use softgfx::util::FpsCounter;
use softgfx::{draw_string, text_width, FontContext, PixelBuffer, Rgb, Surface};
use sdl2::keyboard::Keycode;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Command line overrides on top of the config file
#[derive(Default)]
struct Args {
    config: Option<PathBuf>,
    font: Option<PathBuf>,
    bdf: Option<PathBuf>,
    width: Option<u32>,
    height: Option<u32>,
    no_vsync: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--no-vsync" => parsed.no_vsync = true,
            "--config" | "-c" => {
                parsed.config = value.map(PathBuf::from);
                i += 1;
            },
            "--font" | "-f" => {
                parsed.font = value.map(PathBuf::from);
                i += 1;
            },
            "--bdf" => {
                parsed.bdf = value.map(PathBuf::from);
                i += 1;
            },
            "--width" | "-w" => {
                parsed.width = value.and_then(|v| v.parse().ok());
                i += 1;
            },
            "--height" | "-h" => {
                parsed.height = value.and_then(|v| v.parse().ok());
                i += 1;
            },
            "--resolution" | "-r" => {
                // WxH, e.g. 800x600
                if let Some((w, h)) = value.and_then(|v| v.split_once('x')) {
                    if let (Ok(w), Ok(h)) = (w.parse::<u32>(), h.parse::<u32>()) {
                        parsed.width = Some(w);
                        parsed.height = Some(h);
                    }
                }
                i += 1;
            },
            "--help" => {
                println!("Usage: softgfx-demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --config PATH, -c PATH    JSON demo configuration");
                println!("  --font PATH, -f PATH      PSF1 font for codepoints 0-255");
                println!("  --bdf PATH                BDF font to use as the wide glyph table");
                println!("  --width W, -w W           Window width");
                println!("  --height H, -h H          Window height");
                println!("  --resolution WxH, -r WxH  Set both (e.g., 800x600)");
                println!("  --no-vsync                Disable VSync");
                println!("  --help                    Show this help message");
                std::process::exit(0);
            },
            other => log::warn!("ignoring unknown argument {}", other),
        }
        i += 1;
    }

    parsed
}

fn build_config(args: &Args) -> Result<DemoConfig, String> {
    let mut config = match &args.config {
        Some(path) => DemoConfig::load(path).map_err(|e| format!("{}: {}", path.display(), e))?,
        None => DemoConfig::default(),
    };

    if let Some(w) = args.width {
        config.width = w;
    }
    if let Some(h) = args.height {
        config.height = h;
    }
    if args.no_vsync {
        config.vsync = false;
    }
    if args.font.is_some() {
        config.font.clone_from(&args.font);
    }
    if args.bdf.is_some() {
        config.bdf.clone_from(&args.bdf);
    }
    Ok(config)
}

/// Font setup never aborts the demo: a bad file leaves the fallback glyphs
fn build_fonts(config: &DemoConfig) -> FontContext {
    let mut fonts = FontContext::new();

    if let Some(path) = &config.bdf {
        let table = File::open(path)
            .map_err(softgfx::FontError::from)
            .and_then(|f| parse_bdf(BufReader::new(f)));
        match table {
            Ok(table) => {
                fonts.set_wide_table(table);
                log::info!("{}: {} wide glyphs", path.display(), fonts.wide_table().len());
            },
            Err(e) => log::warn!("{}: {}", path.display(), e),
        }
    }

    if let Some(path) = &config.font {
        // load_path logs the failure
        let _ = fonts.load_path(path);
    }

    fonts
}

fn draw_shapes(buffer: &mut PixelBuffer, t: f32) {
    let w = buffer.width() as i32;
    let h = buffer.height() as i32;

    raster::gradient_triangle(
        buffer,
        Vertex::new(w / 2, h / 4, Rgb::new(255, 40, 40)),
        Vertex::new(w / 4, h * 3 / 4, Rgb::new(40, 255, 40)),
        Vertex::new(w * 3 / 4, h * 3 / 4, Rgb::new(40, 40, 255)),
    );

    buffer.set_color(Rgb::WHITE);
    raster::triangle(buffer, (w / 2, h / 4), (w / 4, h * 3 / 4), (w * 3 / 4, h * 3 / 4));

    buffer.set_color(Rgb::new(255, 200, 0));
    raster::fill_circle(buffer, w / 8, h / 2, h / 12);
    buffer.set_color(Rgb::new(0, 200, 255));
    raster::fill_ellipse(buffer, w * 7 / 8, h / 2, h / 8, h / 16);
    buffer.set_color(Rgb::WHITE);
    raster::circle(buffer, w / 8, h / 2, h / 10);
    raster::ellipse(buffer, w * 7 / 8, h / 2, h / 7, h / 12);

    let sweep = std::f32::consts::FRAC_PI_2;
    raster::arc(buffer, w / 2, h / 2, h / 3, t, t + sweep);

    buffer.set_color(Rgb::new(180, 180, 180));
    raster::rectangle(buffer, 8, h - 40, w - 8, h - 8);
    buffer.set_color(Rgb::new(40, 40, 60));
    raster::fill_rectangle(buffer, 9, h - 39, w - 9, h - 9);
}

fn draw_text(buffer: &mut PixelBuffer, fonts: &FontContext, lines: &[TextLine]) {
    for line in lines {
        buffer.set_color(Rgb::from(line.color));
        draw_string(buffer, fonts, line.x, line.y, &line.text);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = parse_args();
    let config = build_config(&args)?;
    let mut fonts = build_fonts(&config);
    let mut style: GradientStyle = config.background.to_style();

    let options = WindowOptions {
        title: format!("softgfx {}x{}", config.width, config.height),
        width: config.width,
        height: config.height,
        vsync: config.vsync,
    };
    let (mut display, texture_creator) = Display::open(&options)?;
    let mut target = FrameTexture::new(&texture_creator, display.width(), display.height())?;
    let mut buffer = PixelBuffer::with_size(display.width(), display.height());

    let mut fps_counter = FpsCounter::new(60);
    let mut show_fps = false;
    let mut t = 0.0f32;

    println!("=== softgfx demo ===");
    println!("Resolution: {}x{}", display.width(), display.height());
    println!("Use --help for command line options.");
    println!("Controls:");
    println!("  F      - Toggle FPS display");
    println!("  N      - Toggle pixel noise");
    println!("  S      - Toggle scanlines");
    println!("  R      - Unload the PSF font (back to built-in glyphs)");
    println!("  Escape - Quit");

    'main: loop {
        let (dt, avg_fps) = fps_counter.tick();
        t += dt;

        for event in display.events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::KeyDown(Keycode::F) => show_fps = !show_fps,
                InputEvent::KeyDown(Keycode::N) => style.pixel_noise = !style.pixel_noise,
                InputEvent::KeyDown(Keycode::S) => style.scanlines = !style.scanlines,
                InputEvent::KeyDown(Keycode::R) => fonts.reset(),
                InputEvent::KeyDown(_) => {},
            }
        }

        // fresh noise every frame
        style.seed = style.seed.wrapping_add(1);
        let (w, h) = (buffer.width() as i32, buffer.height() as i32);
        raster::gradient_vertical(&mut buffer, &style, w, h);
        draw_shapes(&mut buffer, t);
        draw_text(&mut buffer, &fonts, &config.lines);

        if show_fps {
            let label = format!("{:.0} fps", avg_fps);
            buffer.set_color(Rgb::new(0, 255, 0));
            draw_string(&mut buffer, &fonts, w - text_width(&label) - 4, 4, &label);
        }

        display.present(&mut target, &buffer)?;
    }

    Ok(())
}
