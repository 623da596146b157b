//! Descriptive statistics for the Salary column

use std::fmt;

/// Summary of a numeric column
///
/// `std` is the sample standard deviation and quartiles use linear
/// interpolation between closest ranks. Every field but `count` is `None`
/// when there is nothing to describe (`std` also needs two values).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalaryStats {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub p25: Option<f64>,
    pub p50: Option<f64>,
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

impl SalaryStats {
    /// Describe a set of values
    ///
    /// # Example
    /// ```
    /// use employee_etl::transform::SalaryStats;
    ///
    /// let stats = SalaryStats::describe(&[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(stats.count, 4);
    /// assert_eq!(stats.mean, Some(2.5));
    /// assert_eq!(stats.p25, Some(1.75));
    /// assert_eq!(stats.max, Some(4.0));
    /// ```
    pub fn describe(values: &[f64]) -> Self {
        let count = values.len();
        if count == 0 {
            return Self::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std = (count > 1).then(|| {
            let var = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            var.sqrt()
        });

        Self {
            count,
            mean: Some(mean),
            std,
            min: sorted.first().copied(),
            p25: Some(quantile(&sorted, 0.25)),
            p50: Some(quantile(&sorted, 0.50)),
            p75: Some(quantile(&sorted, 0.75)),
            max: sorted.last().copied(),
        }
    }
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

impl fmt::Display for SalaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "count={}", self.count)?;
        let fields = [
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.p25),
            ("50%", self.p50),
            ("75%", self.p75),
            ("max", self.max),
        ];
        for (name, value) in fields {
            if let Some(v) = value {
                write!(f, " {}={:.2}", name, v)?;
            }
        }
        Ok(())
    }
}
