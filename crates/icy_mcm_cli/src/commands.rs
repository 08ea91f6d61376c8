use std::{fs, path::Path};

use anyhow::{bail, Context};
use icy_mcm::{logo, sheet, LineEnding, McmFont};

use crate::Commands;

/// Runs one command, returns the success message.
pub fn run(command: &Commands) -> anyhow::Result<String> {
    match command {
        Commands::Mcm2Sheet { mcm, png } => {
            require_file(mcm, "Input font")?;
            mcm_to_sheet(mcm, png)?;
            Ok(format!(
                "Wrote {} ({}x{}) from {}",
                png.display(),
                sheet::SHEET_WIDTH,
                sheet::SHEET_HEIGHT,
                mcm.display()
            ))
        }
        Commands::Sheet2Mcm { png, mcm, crlf } => {
            require_file(png, "Input sheet")?;
            sheet_to_mcm(png, mcm, line_ending(*crlf))?;
            Ok(format!("Wrote {} from {}", mcm.display(), png.display()))
        }
        Commands::InjectLogo {
            base_mcm,
            logo_png,
            out_mcm,
            crlf,
        } => {
            require_file(base_mcm, "Base font")?;
            require_file(logo_png, "Logo PNG")?;
            inject_logo(base_mcm, logo_png, out_mcm, line_ending(*crlf))?;
            Ok(format!("Wrote {} (logo injected A0-FF)", out_mcm.display()))
        }
    }
}

fn line_ending(crlf: bool) -> LineEnding {
    if crlf {
        LineEnding::CrLf
    } else {
        LineEnding::Lf
    }
}

fn require_file(path: &Path, what: &str) -> anyhow::Result<()> {
    if !path.exists() {
        bail!("{what} not found: {}", path.display());
    }
    Ok(())
}

fn load_font(path: &Path) -> anyhow::Result<McmFont> {
    let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let font = McmFont::from_bytes(&data).with_context(|| format!("Failed to load font {}", path.display()))?;
    log::info!("loaded font {}", path.display());
    Ok(font)
}

fn load_png(path: &Path) -> anyhow::Result<image::RgbImage> {
    let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    sheet::decode_png(&data).with_context(|| format!("Failed to load image {}", path.display()))
}

fn save(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

fn mcm_to_sheet(mcm: &Path, png: &Path) -> anyhow::Result<()> {
    let font = load_font(mcm)?;
    let data = sheet::encode_png(&sheet::font_to_image(&font))?;
    save(png, &data)
}

fn sheet_to_mcm(png: &Path, mcm: &Path, line_ending: LineEnding) -> anyhow::Result<()> {
    let img = load_png(png)?;
    let font = sheet::font_from_image(&img).with_context(|| format!("Invalid sheet {}", png.display()))?;
    save(mcm, &font.to_bytes(line_ending))
}

fn inject_logo(base_mcm: &Path, logo_png: &Path, out_mcm: &Path, line_ending: LineEnding) -> anyhow::Result<()> {
    let mut font = load_font(base_mcm)?;
    let img = load_png(logo_png)?;
    logo::inject_logo(&mut font, &img).with_context(|| format!("Invalid logo {}", logo_png.display()))?;
    save(out_mcm, &font.to_bytes(line_ending))
}
