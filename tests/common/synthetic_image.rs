/// Deterministic low-amplitude noise, like the grain of a scanned page.
pub fn scan_noise_u8(size: usize, amplitude: u8, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..size * size)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % (u64::from(amplitude) + 1)) as u8
        })
        .collect()
}

/// Draws a 1-px line through the image centre at `angle_deg` (y axis down).
pub fn draw_line_u8(img: &mut [u8], size: usize, angle_deg: f64, value: u8) {
    assert_eq!(img.len(), size * size, "expected a square single-channel image");
    let slope = angle_deg.to_radians().tan();
    let c = size as f64 / 2.0;
    for x in 0..size {
        let y = (c + (x as f64 - c) * slope).round();
        if y >= 0.0 && y < size as f64 {
            img[y as usize * size + x] = value;
        }
    }
}

/// Black square image with one white line at `angle_deg`.
pub fn line_u8(size: usize, angle_deg: f64) -> Vec<u8> {
    let mut img = vec![0u8; size * size];
    draw_line_u8(&mut img, size, angle_deg, 255);
    img
}

/// Noisy square image with one white line at `angle_deg`.
pub fn noisy_line_u8(size: usize, angle_deg: f64) -> Vec<u8> {
    let mut img = scan_noise_u8(size, 30, 7);
    draw_line_u8(&mut img, size, angle_deg, 255);
    img
}

/// Replicates a gray buffer into `channels` interleaved channels.
pub fn replicate_channels(gray: &[u8], channels: usize) -> Vec<u8> {
    gray.iter()
        .flat_map(|&v| std::iter::repeat(v).take(channels))
        .collect()
}

/// Rotates a square single-channel image by 90° clockwise.
pub fn rotate_cw_u8(img: &[u8], size: usize) -> Vec<u8> {
    let mut out = vec![0u8; size * size];
    for r in 0..size {
        for c in 0..size {
            out[r * size + c] = img[(size - 1 - c) * size + r];
        }
    }
    out
}

/// Rotates a square single-channel image by 180°.
pub fn rotate_half_turn_u8(img: &[u8]) -> Vec<u8> {
    img.iter().rev().copied().collect()
}
