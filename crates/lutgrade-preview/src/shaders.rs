//! WGSL shader source for the LUT preview pass.

/// Fullscreen LUT preview: samples the source image, reconstructs a
/// trilinear 3D lookup from the slice-stacked 2D LUT texture, and blends
/// by `intensity`.
///
/// Expects the LUT texture bound with bilinear filtering and clamp-to-edge
/// addressing; `lut_size` is the lattice size N (texture is N x N^2).
pub const LUT_PREVIEW: &str = r#"
struct Params {
    lut_size: f32,
    intensity: f32,
}

@group(0) @binding(0) var source_tex: texture_2d<f32>;
@group(0) @binding(1) var source_samp: sampler;
@group(0) @binding(2) var lut_tex: texture_2d<f32>;
@group(0) @binding(3) var lut_samp: sampler;
@group(0) @binding(4) var<uniform> params: Params;

struct VertexOut {
    @builtin(position) position: vec4<f32>,
    @location(0) uv: vec2<f32>,
}

@vertex
fn vs_main(@builtin(vertex_index) index: u32) -> VertexOut {
    // Fullscreen triangle.
    var out: VertexOut;
    let x = f32(i32(index) / 2) * 4.0 - 1.0;
    let y = f32(i32(index) & 1) * 4.0 - 1.0;
    out.position = vec4<f32>(x, y, 0.0, 1.0);
    out.uv = vec2<f32>((x + 1.0) * 0.5, 1.0 - (y + 1.0) * 0.5);
    return out;
}

// Reconstructs a trilinear 3D lookup from the N x N^2 slice-stacked
// texture. The blue axis interpolates toward whichever neighboring slice
// is nearer (sign of interp - 0.5), which halves the interpolation
// distance and keeps both taps away from slice boundaries.
fn lut_lookup(size: f32, rgb: vec3<f32>) -> vec3<f32> {
    let slice_height = 1.0 / size;
    let y_pixel_height = 1.0 / (size * size);

    let slice = rgb.b * size;
    let interp = fract(slice);
    let slice0 = slice - interp;
    let centered_interp = interp - 0.5;
    let slice1 = slice0 + sign(centered_interp);

    // Pull the y sample in by half a texel on each side so bilinear
    // filtering never bleeds across the neighboring slice's rows.
    let green_offset = clamp(
        rgb.g * slice_height,
        y_pixel_height * 0.5,
        slice_height - y_pixel_height * 0.5,
    );

    let uv0 = vec2<f32>(rgb.r, slice0 * slice_height + green_offset);
    let uv1 = vec2<f32>(rgb.r, slice1 * slice_height + green_offset);

    let sample0 = textureSample(lut_tex, lut_samp, uv0).rgb;
    let sample1 = textureSample(lut_tex, lut_samp, uv1).rgb;
    return mix(sample0, sample1, abs(centered_interp));
}

@fragment
fn fs_main(in: VertexOut) -> @location(0) vec4<f32> {
    let texel = textureSample(source_tex, source_samp, in.uv);

    // Remap into texel-center space: lattice points 0 and N-1 must land
    // on the centers of the first and last texel columns.
    let pixel_width = 1.0 / params.lut_size;
    let half_pixel_width = 0.5 / params.lut_size;
    let uvw = vec3<f32>(half_pixel_width) + texel.rgb * (1.0 - pixel_width);

    let lut_value = vec4<f32>(lut_lookup(params.lut_size, uvw), texel.a);
    return mix(texel, lut_value, params.intensity);
}
"#;
