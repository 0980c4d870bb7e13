/// Vertical value scale. Bar charts always anchor at zero, so the domain is
/// `0..max` with `max` rounded up to a "nice" tick boundary (1/2/5 times a
/// power of ten).
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
    pub max: f64,
    pub step: f64,
}

impl LinearScale {
    /// Fits the scale to the largest value in the data. Degenerate input
    /// (empty, all-zero, or non-finite) falls back to a 0..1 domain so the
    /// axis still renders.
    pub fn fit(maxValue: f64, tickCount: usize) -> Self {
        let max = if maxValue.is_finite() && maxValue > 0.0 {
            maxValue
        } else {
            1.0
        };

        let steps = tickCount.max(2) - 1;
        let rawStep = max / steps as f64;
        let magnitude = 10f64.powf(rawStep.log10().floor());
        let residual = rawStep / magnitude;
        let step = magnitude
            * if residual < 1.5 {
                1.0
            } else if residual < 3.0 {
                2.0
            } else if residual < 7.0 {
                5.0
            } else {
                10.0
            };

        Self {
            max: (max / step).ceil() * step,
            step,
        }
    }

    /// Tick values from 0 to the nice maximum, inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.max / self.step).round() as usize;
        (0..=count).map(|i| i as f64 * self.step).collect()
    }

    /// Position of `value` as a 0..1 fraction of the domain, clamped.
    pub fn fraction(&self, value: f64) -> f64 {
        (value / self.max).clamp(0.0, 1.0)
    }
}

/// Horizontal category scale: splits the plot width into one band per row,
/// with grouped per-series slots inside each band.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    start: f32,
    band_width: f32,
    count: usize,
}

/// Fraction of each band left empty on either side of the bar group.
const BAND_PADDING: f32 = 0.15;
/// Fraction of each series slot the bar actually fills.
const BAR_FILL: f32 = 0.9;

impl BandScale {
    pub fn new(count: usize, start: f32, width: f32) -> Self {
        let band_width = if count == 0 { 0.0 } else { width / count as f32 };
        Self {
            start,
            band_width,
            count,
        }
    }

    pub fn band_x(&self, index: usize) -> f32 {
        self.start + index as f32 * self.band_width
    }

    pub fn band_width(&self) -> f32 {
        self.band_width
    }

    pub fn center(&self, index: usize) -> f32 {
        self.band_x(index) + self.band_width / 2.0
    }

    /// Pixel x and width of the bar for `series_index` within the band at
    /// `index`, given `series_count` bars per group.
    pub fn slot(&self, index: usize, series_index: usize, series_count: usize) -> (f32, f32) {
        let inner = self.band_width * (1.0 - 2.0 * BAND_PADDING);
        let innerStart = self.band_x(index) + self.band_width * BAND_PADDING;
        let slotWidth = inner / series_count.max(1) as f32;
        let barWidth = slotWidth * BAR_FILL;
        let x = innerStart + series_index as f32 * slotWidth + (slotWidth - barWidth) / 2.0;
        (x, barWidth)
    }

    pub fn count(&self) -> usize {
        self.count
    }
}
