//! LUT generation command.

use crate::GenerateArgs;
use anyhow::{Context, Result};
use lutgrade_color::{ColorMatrix, GradingSettings, Transform};
use lutgrade_lut::{LutLattice, cube};
use tracing::debug;

pub fn run(args: GenerateArgs, verbose: bool) -> Result<()> {
    let transform = build_transform(&args)?;
    debug!(size = args.size, ?transform, "generating LUT");

    let lattice = LutLattice::generate(&transform, args.size)
        .context("failed to generate LUT lattice")?;

    match &args.output {
        Some(path) => {
            cube::write(path, &args.title, &lattice, None)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if verbose {
                println!(
                    "Wrote {} ({} lattice points)",
                    path.display(),
                    lattice.entry_count()
                );
            }
        }
        None => print!("{}", cube::serialize(&args.title, &lattice, None)),
    }

    Ok(())
}

fn build_transform(args: &GenerateArgs) -> Result<Transform> {
    if let Some(values) = &args.matrix {
        let values: [f32; 12] = values
            .as_slice()
            .try_into()
            .context("--matrix expects exactly 12 values")?;
        return Ok(Transform::Matrix(ColorMatrix::new(values)));
    }

    if let Some(path) = &args.preset {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read preset {}", path.display()))?;
        let settings: GradingSettings =
            serde_yaml::from_str(&text).context("invalid grading preset")?;
        return Ok(Transform::Grading(settings));
    }

    Ok(Transform::Grading(GradingSettings {
        brightness: args.brightness,
        contrast: args.contrast,
        gamma: args.gamma,
        hue: args.hue,
        saturation: args.saturation,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_args() -> GenerateArgs {
        GenerateArgs {
            output: None,
            title: String::new(),
            size: 2,
            brightness: 0.0,
            contrast: 1.0,
            gamma: 1.0,
            hue: 0.0,
            saturation: 1.0,
            preset: None,
            matrix: None,
        }
    }

    #[test]
    fn preset_file_overrides_grading_flags() {
        let dir = tempfile::tempdir().unwrap();
        let preset = dir.path().join("grade.yaml");
        std::fs::write(&preset, "contrast: 2.0\nsaturation: 0.5\n").unwrap();

        let args = GenerateArgs {
            preset: Some(preset),
            contrast: 1.3,
            ..neutral_args()
        };
        let transform = build_transform(&args).unwrap();

        // Fields absent from the preset fall back to neutral defaults.
        let expected = GradingSettings {
            contrast: 2.0,
            saturation: 0.5,
            ..Default::default()
        };
        assert_eq!(transform, Transform::Grading(expected));
    }

    #[test]
    fn matrix_flag_selects_matrix_transform() {
        let args = GenerateArgs {
            matrix: Some(vec![
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0,
            ]),
            ..neutral_args()
        };
        let transform = build_transform(&args).unwrap();
        assert_eq!(transform, Transform::Matrix(ColorMatrix::IDENTITY));

        let args = GenerateArgs {
            matrix: Some(vec![1.0, 0.0]),
            ..neutral_args()
        };
        assert!(build_transform(&args).is_err());
    }

    #[test]
    fn run_writes_cube_from_preset() {
        let dir = tempfile::tempdir().unwrap();
        let preset = dir.path().join("punchy.yaml");
        std::fs::write(&preset, "contrast: 2.0\n").unwrap();
        let output = dir.path().join("punchy.cube");

        let args = GenerateArgs {
            output: Some(output.clone()),
            title: "Punchy".into(),
            preset: Some(preset),
            ..neutral_args()
        };
        run(args, false).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.contains("TITLE \"Punchy\""));
        assert!(text.contains("LUT_3D_SIZE 2"));

        let data: Vec<&str> = text.lines().skip(7).collect();
        assert_eq!(data.len(), 8);
        // Contrast 2 pushes the corners to the extremes.
        assert_eq!(data[0], "0.000000 0.000000 0.000000");
        assert_eq!(data[7], "1.000000 1.000000 1.000000");
    }
}
