//! Typed field access with default-value fallback.

use std::fmt::Debug;
use std::sync::Arc;

use tracing::debug;

use crate::{
    config::Config,
    convert::coerce,
    locator::Locator,
    row::Row,
    sink::{ConversionFailure, FailureSink, NoopSink},
    target::{Kind, TargetType},
    value::FieldValue,
    Datum, Error,
};

/// Reads fields from rows, converted to a target type.
///
/// Null fields produce the target's default value. So do values that
/// fail to convert; those failures are also logged and passed to the
/// configured [`FailureSink`]. Unknown names, positions outside the row
/// and nullable timestamp targets are returned as errors.
#[derive(Clone)]
pub struct FieldAccessor {
    config: Config,
    sink: Arc<dyn FailureSink>,
}

impl Debug for FieldAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for FieldAccessor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl FieldAccessor {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sink: Arc::new(NoopSink),
        }
    }

    /// Report recovered failures to this sink.
    pub fn with_sink(mut self, sink: Arc<dyn FailureSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the field value converted to `target`.
    pub fn get_value<R: Row + ?Sized>(
        &self,
        row: &R,
        target: TargetType,
        locator: impl Into<Locator>,
    ) -> Result<Datum, Error> {
        let locator: Locator = locator.into();
        let position = locator.resolve(row)?;
        row.check_position(position)?;

        // Rejected before the null check: a nullable timestamp target
        // fails even when the field is null.
        if !target.is_supported() {
            return Err(Error::UnsupportedType(target));
        }

        if row.is_null(position)? {
            return Ok(target.default_value());
        }

        match self.convert(row, target, position) {
            Ok(Datum::Null) => Ok(target.default_value()),
            Ok(value) => Ok(value),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                self.recovered(position, target, &err);
                Ok(target.default_value())
            }
        }
    }

    /// Get the field at position as `T`.
    pub fn get<T: FieldValue, R: Row + ?Sized>(&self, row: &R, position: usize) -> Result<T, Error> {
        self.get_as(row, Locator::Position(position))
    }

    /// Get the named field as `T`.
    pub fn get_by_name<T: FieldValue, R: Row + ?Sized>(&self, row: &R, name: &str) -> Result<T, Error> {
        self.get_as(row, Locator::from(name))
    }

    fn get_as<T: FieldValue, R: Row + ?Sized>(&self, row: &R, locator: Locator) -> Result<T, Error> {
        let value = self.get_value(row, T::target(), locator)?;
        let found = value.type_name();
        T::from_datum(value).ok_or(Error::UnexpectedValue {
            expected: T::target(),
            found,
        })
    }

    /// Is the field null. Accepts a name or a position.
    pub fn is_null<R: Row + ?Sized>(&self, row: &R, locator: impl Into<Locator>) -> Result<bool, Error> {
        let locator: Locator = locator.into();
        let position = locator.resolve(row)?;
        row.check_position(position)?;
        row.is_null(position)
    }

    fn convert<R: Row + ?Sized>(
        &self,
        row: &R,
        target: TargetType,
        position: usize,
    ) -> Result<Datum, Error> {
        let mut value = row.raw_value(position)?;

        if target.kind() == Kind::Text {
            let text = value.to_string();
            value = Datum::Text(if self.config.trim_text {
                text.trim().to_string()
            } else {
                text
            });
        }

        Ok(coerce(value, target.kind(), &self.config)?)
    }

    fn recovered(&self, position: usize, target: TargetType, err: &Error) {
        if self.config.log_recovered {
            debug!(
                "field #{} not convertible to {}, using default [{}]",
                position, target, err
            );
        }

        self.sink.conversion_failed(&ConversionFailure {
            position,
            target,
            error: err.to_string(),
        });
    }
}
