//! Tabulated eye-response reference curves.
//!
//! Loads CSV tables shaped like the CIE 1931 color matching functions: a
//! wavelength column followed by two or three response columns.

use std::io;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("failed to read response table: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: expected a wavelength plus 2 or 3 response columns, got {columns} columns")]
    BadRow { row: usize, columns: usize },
    #[error("row {row}: invalid number `{field}`")]
    BadNumber { row: usize, field: String },
    #[error("response table is empty")]
    Empty,
}

/// Response curves tabulated against wavelength.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCurves {
    wavelength: Vec<f64>,
    /// One vector per response channel, each as long as `wavelength`.
    channels: Vec<Vec<f64>>,
}

impl ResponseCurves {
    /// Load from a headerless CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ResponseError> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path.as_ref())?;
        Self::parse(reader)
    }

    /// Load from any reader producing headerless CSV.
    pub fn from_reader(reader: impl io::Read) -> Result<Self, ResponseError> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        Self::parse(reader)
    }

    fn parse<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Self, ResponseError> {
        let mut wavelength = Vec::new();
        let mut channels: Vec<Vec<f64>> = Vec::new();

        for (row, record) in reader.records().enumerate() {
            let record = record?;
            if !(3..=4).contains(&record.len()) || (!channels.is_empty() && record.len() - 1 != channels.len()) {
                return Err(ResponseError::BadRow {
                    row,
                    columns: record.len(),
                });
            }
            if channels.is_empty() {
                channels = vec![Vec::new(); record.len() - 1];
            }

            let parse = |idx: usize| {
                let field = &record[idx];
                field.parse::<f64>().map_err(|_| ResponseError::BadNumber {
                    row,
                    field: field.to_string(),
                })
            };
            wavelength.push(parse(0)?);
            for (c, channel) in channels.iter_mut().enumerate() {
                channel.push(parse(c + 1)?);
            }
        }

        if wavelength.is_empty() {
            return Err(ResponseError::Empty);
        }
        log::debug!(
            "loaded {} response rows with {} channels",
            wavelength.len(),
            channels.len()
        );
        Ok(Self {
            wavelength,
            channels,
        })
    }

    pub fn len(&self) -> usize {
        self.wavelength.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelength.is_empty()
    }

    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    pub fn wavelength(&self) -> &[f64] {
        &self.wavelength
    }

    pub fn channel(&self, i: usize) -> Option<&[f64]> {
        self.channels.get(i).map(Vec::as_slice)
    }

    /// Restrict the curves to wavelengths inside `[wlmin, wlmax]`.
    pub fn clip(&self, wlmin: f64, wlmax: f64) -> Self {
        let keep: Vec<usize> = self
            .wavelength
            .iter()
            .enumerate()
            .filter(|(_, &wl)| wl >= wlmin && wl <= wlmax)
            .map(|(i, _)| i)
            .collect();

        Self {
            wavelength: keep.iter().map(|&i| self.wavelength[i]).collect(),
            channels: self
                .channels
                .iter()
                .map(|channel| keep.iter().map(|&i| channel[i]).collect())
                .collect(),
        }
    }

    /// Index of the tabulated wavelength nearest to `target`. `None` when the
    /// table was clipped down to nothing.
    pub fn nearest(&self, target: f64) -> Option<usize> {
        nearest_index(&self.wavelength, target)
    }
}

/// Index of the entry nearest to `target`, by absolute difference.
pub fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - target).abs().total_cmp(&(*b - target).abs()))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CIE_SNIPPET: &str = "\
400,0.0143,0.0004,0.0679
450,0.3362,0.0380,1.7721
500,0.0049,0.3230,0.2720
550,0.4334,0.9950,0.0087
600,1.0622,0.6310,0.0008
";

    #[test]
    fn parses_a_four_column_table() {
        let curves = ResponseCurves::from_reader(CIE_SNIPPET.as_bytes()).unwrap();
        assert_eq!(curves.len(), 5);
        assert_eq!(curves.num_channels(), 3);
        assert_eq!(curves.wavelength()[0], 400.0);
        assert_eq!(curves.channel(1).unwrap()[3], 0.9950);
        assert!(curves.channel(3).is_none());
    }

    #[test]
    fn parses_a_three_column_table() {
        let curves = ResponseCurves::from_reader("400,0.1,0.2\n500,0.3,0.4\n".as_bytes()).unwrap();
        assert_eq!(curves.num_channels(), 2);
        assert_eq!(curves.channel(1).unwrap(), &[0.2, 0.4]);
    }

    #[test]
    fn rejects_bad_rows() {
        assert!(matches!(
            ResponseCurves::from_reader("400,0.1\n".as_bytes()),
            Err(ResponseError::BadRow { row: 0, columns: 2 })
        ));
        assert!(matches!(
            ResponseCurves::from_reader("400,a,b\n".as_bytes()),
            Err(ResponseError::BadNumber { row: 0, .. })
        ));
        assert!(matches!(
            ResponseCurves::from_reader("".as_bytes()),
            Err(ResponseError::Empty)
        ));
    }

    #[test]
    fn clip_keeps_the_window() {
        let curves = ResponseCurves::from_reader(CIE_SNIPPET.as_bytes()).unwrap();
        let clipped = curves.clip(450.0, 550.0);
        assert_eq!(clipped.wavelength(), &[450.0, 500.0, 550.0]);
        assert_eq!(clipped.channel(0).unwrap().len(), 3);

        let empty = curves.clip(900.0, 1000.0);
        assert!(empty.is_empty());
        assert_eq!(empty.nearest(500.0), None);
    }

    #[test]
    fn nearest_picks_the_closest_row() {
        let curves = ResponseCurves::from_reader(CIE_SNIPPET.as_bytes()).unwrap();
        assert_eq!(curves.nearest(449.0), Some(1));
        assert_eq!(curves.nearest(1000.0), Some(4));
        assert_eq!(nearest_index(&[1.0, 4.0, 9.0], 5.0), Some(1));
        assert_eq!(nearest_index(&[], 5.0), None);
    }
}
