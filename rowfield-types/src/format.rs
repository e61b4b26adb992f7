/// Wire encoding of a column value.
#[derive(PartialEq, Debug, Copy, Clone, PartialOrd, Ord, Eq, Default, Hash)]
#[repr(C)]
pub enum Format {
    #[default]
    Text = 0,
    Binary = 1,
}

impl From<Format> for i16 {
    fn from(val: Format) -> Self {
        match val {
            Format::Text => 0,
            Format::Binary => 1,
        }
    }
}

impl TryFrom<i16> for Format {
    type Error = crate::Error;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Format::Text),
            1 => Ok(Format::Binary),
            _ => Err(crate::Error::UnexpectedPayload),
        }
    }
}
