use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use softblit::{Font, SaveFormat, Surface, Transform, ATLAS_CHAR_ORDER};

#[derive(Parser)]
#[command(name = "softblit", about = "SFont atlas and pixel surface toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render text with an SFont atlas
    Render {
        #[arg(short, long)]
        atlas: String,
        #[arg(short, long)]
        text: String,
        #[arg(short, long)]
        output: String,
        /// Canvas width; defaults to the rendered text width
        #[arg(long)]
        width: Option<u32>,
        /// Canvas height; defaults to the font row height
        #[arg(long)]
        height: Option<u32>,
    },
    /// Inspect an SFont atlas
    Inspect {
        #[arg(short, long)]
        atlas: String,
    },
    /// Apply a pixel transform to an image
    Transform {
        #[arg(short, long)]
        input: String,
        #[arg(short, long)]
        output: String,
        /// One of: plus, mult, gray, g2a, bw
        #[arg(long)]
        op: String,
        #[arg(long, default_value = "0")]
        param: f32,
    },
}

fn load_font(path: &str) -> Result<Font> {
    let atlas = Surface::open(path).with_context(|| format!("loading atlas {path}"))?;
    Ok(Font::load(&atlas)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Cmd::Render {
            atlas,
            text,
            output,
            width,
            height,
        } => {
            let font = load_font(&atlas)?;
            let w = width.unwrap_or_else(|| font.text_width(&text)).max(1);
            let h = height.unwrap_or_else(|| font.text_height(&text)).max(1);
            let mut canvas = Surface::new(w, h);
            font.draw_text(&mut canvas, 0, 0, &text);
            canvas.save_to_file(&output, SaveFormat::Png)?;
            eprintln!("Rendered {} characters -> {output}", text.chars().count());
        }
        Cmd::Inspect { atlas } => {
            let font = load_font(&atlas)?;
            println!("SFont atlas: {atlas}");
            println!("  Glyphs: {}", font.glyph_count());
            println!("  Row height: {}", font.height());
            let missing: String = ATLAS_CHAR_ORDER
                .chars()
                .filter(|c| !font.has_char(*c))
                .take(10)
                .collect();
            if !missing.is_empty() {
                println!("  Missing (first 10): {missing:?}");
            }
        }
        Cmd::Transform {
            input,
            output,
            op,
            param,
        } => {
            let mut img =
                Surface::open(&input).with_context(|| format!("loading image {input}"))?;
            let mut transform = match op.as_str() {
                "plus" => Transform::Plus(param as i32),
                "mult" => Transform::Mult(param),
                "gray" => Transform::Gray,
                "g2a" => Transform::GrayToAlpha,
                "bw" => Transform::BlackWhite(param as u8),
                other => anyhow::bail!("unknown transform '{other}'"),
            };
            transform.apply(&mut img);
            img.save_to_file(&output, SaveFormat::Png)?;
            eprintln!("Transformed {input} -> {output}");
        }
    }
    Ok(())
}
