use pencil_sketch::filters::{
    box_blur, box_blur_into, desaturate, dodge_channel, invert, BlurStrategy, LumaWeights,
};
use pencil_sketch::image::{ImageView, PixelBuffer};
use proptest::prelude::*;

fn buffer_strategy(max_side: usize) -> impl Strategy<Value = PixelBuffer> {
    (1..=max_side, 1..=max_side).prop_flat_map(|(w, h)| {
        prop::collection::vec(any::<u8>(), w * h * 4)
            .prop_map(move |data| PixelBuffer::from_raw(w, h, data).unwrap())
    })
}

fn weights_strategy() -> impl Strategy<Value = LumaWeights> {
    prop_oneof![Just(LumaWeights::Legacy), Just(LumaWeights::Rec601)]
}

proptest! {
    #[test]
    fn desaturate_writes_weighted_gray(src in buffer_strategy(8), weights in weights_strategy()) {
        let mut out = src.clone();
        desaturate(&mut out, weights);
        for (px, orig) in out.pixels().zip(src.pixels()) {
            let [wr, wg, wb] = weights.coefficients();
            let expected = (wr * orig[0] as f32 + wg * orig[1] as f32 + wb * orig[2] as f32)
                .round()
                .clamp(0.0, 255.0) as u8;
            prop_assert_eq!(px[0], expected);
            prop_assert_eq!(px[1], expected);
            prop_assert_eq!(px[2], expected);
            prop_assert_eq!(px[3], orig[3]);
        }
    }

    #[test]
    fn blur_radius_zero_is_identity(src in buffer_strategy(10)) {
        prop_assert_eq!(box_blur(&src, 0), src);
    }

    #[test]
    fn blur_stays_within_neighborhood_range(src in buffer_strategy(8), radius in 1usize..4) {
        let out = box_blur(&src, radius);
        let (w, h) = src.dimensions();
        for y in 0..h {
            for x in 0..w {
                let x0 = x.saturating_sub(radius);
                let x1 = (x + radius).min(w - 1);
                let y0 = y.saturating_sub(radius);
                let y1 = (y + radius).min(h - 1);
                for c in 0..4 {
                    let mut lo = u8::MAX;
                    let mut hi = u8::MIN;
                    for sy in y0..=y1 {
                        for sx in x0..=x1 {
                            let v = src.pixel(sx, sy)[c];
                            lo = lo.min(v);
                            hi = hi.max(v);
                        }
                    }
                    let v = out.pixel(x, y)[c];
                    prop_assert!(lo <= v && v <= hi, "({x},{y}) c{c}: {v} not in [{lo},{hi}]");
                }
            }
        }
    }

    #[test]
    fn blur_strategies_are_bit_identical(src in buffer_strategy(12), radius in 0usize..10) {
        let mut temp = Vec::new();
        let mut direct = PixelBuffer::default();
        let mut running = PixelBuffer::default();
        box_blur_into(&src, radius, BlurStrategy::Direct, &mut temp, &mut direct);
        box_blur_into(&src, radius, BlurStrategy::RunningSum, &mut temp, &mut running);
        prop_assert_eq!(direct, running);
    }

    #[test]
    fn invert_is_an_involution(src in buffer_strategy(10)) {
        prop_assert_eq!(invert(&invert(&src)), src);
    }

    #[test]
    fn dodge_full_blend_is_white(base in any::<u8>()) {
        prop_assert_eq!(dodge_channel(base, 255), 255);
    }

    #[test]
    fn dodge_never_darkens(base in any::<u8>(), layer in any::<u8>()) {
        prop_assert!(dodge_channel(base, layer) >= base);
    }
}
