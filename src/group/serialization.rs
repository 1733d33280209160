//! Serialization and deserialization utilities for group elements and scalars.
//!
//! This module provides functions to convert group elements and scalars to and from
//! byte representations using canonical encodings. Every element of a given group
//! has the same encoded width, so concatenations of encodings are unambiguous.

use alloc::vec::Vec;
use ff::PrimeField;
use group::prime::PrimeGroup;

use crate::errors::Error;

/// Get the serialized length of a group element in bytes.
pub fn group_elt_serialized_len<G: PrimeGroup>() -> usize {
    G::Repr::default().as_ref().len()
}

/// Serialize a sequence of group elements into a byte vector.
///
/// # Parameters
/// - `elements`: The group elements to serialize.
///
/// # Returns
/// - A `Vec<u8>` containing the concatenated canonical compressed byte representations.
pub fn serialize_elements<'a, G: PrimeGroup>(elements: impl IntoIterator<Item = &'a G>) -> Vec<u8> {
    let mut bytes = Vec::new();
    serialize_elements_into(elements, &mut bytes);
    bytes
}

/// Append the canonical encodings of `elements` to `out`.
pub fn serialize_elements_into<'a, G: PrimeGroup>(
    elements: impl IntoIterator<Item = &'a G>,
    out: &mut Vec<u8>,
) {
    for element in elements {
        out.extend_from_slice(element.to_bytes().as_ref());
    }
}

/// Deserialize `count` group elements from the front of `data`, advancing it.
///
/// # Errors
/// - [`Error::InvalidLength`] if `data` holds fewer bytes than required.
/// - [`Error::InvalidPoint`] if an encoding does not decode to a group element.
pub fn deserialize_elements<G: PrimeGroup>(
    data: &mut &[u8],
    count: usize,
) -> Result<Vec<G>, Error> {
    let mut elements = Vec::with_capacity(count);
    for _ in 0..count {
        let mut repr = G::Repr::default();
        let slice = take(data, repr.as_ref().len())?;
        repr.as_mut().copy_from_slice(slice);

        let element: Option<G> = G::from_bytes(&repr).into();
        elements.push(element.ok_or(Error::InvalidPoint)?);
    }
    Ok(elements)
}

/// Serialize a slice of scalar field elements into a byte vector.
///
/// # Returns
/// - A `Vec<u8>` containing the scalar bytes in big-endian order.
pub fn serialize_scalars<F: PrimeField>(scalars: &[F]) -> Vec<u8> {
    let mut bytes = Vec::new();
    serialize_scalars_into(scalars, &mut bytes);
    bytes
}

/// Append the big-endian encodings of `scalars` to `out`.
pub fn serialize_scalars_into<F: PrimeField>(scalars: &[F], out: &mut Vec<u8>) {
    for scalar in scalars {
        let mut scalar_bytes = scalar.to_repr().as_ref().to_vec();
        scalar_bytes.reverse();
        out.extend_from_slice(&scalar_bytes);
    }
}

/// Deserialize `count` big-endian scalars from the front of `data`, advancing it.
///
/// # Errors
/// - [`Error::InvalidLength`] if `data` holds fewer bytes than required.
/// - [`Error::InvalidScalar`] if an encoding is not reduced modulo the group order.
pub fn deserialize_scalars<F: PrimeField>(data: &mut &[u8], count: usize) -> Result<Vec<F>, Error> {
    let mut scalars = Vec::with_capacity(count);
    for _ in 0..count {
        let mut repr = F::Repr::default();
        let slice = take(data, repr.as_ref().len())?;
        let repr_mut = repr.as_mut();
        repr_mut.copy_from_slice(slice);
        repr_mut.reverse();

        let scalar: Option<F> = F::from_repr(repr).into();
        scalars.push(scalar.ok_or(Error::InvalidScalar)?);
    }
    Ok(scalars)
}

/// Fails with [`Error::InvalidLength`] unless every byte of `data` was consumed.
pub(crate) fn ensure_consumed(data: &[u8], total: usize) -> Result<(), Error> {
    if data.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            expected: total - data.len(),
            actual: total,
        })
    }
}

fn take<'a>(data: &mut &'a [u8], len: usize) -> Result<&'a [u8], Error> {
    if data.len() < len {
        return Err(Error::InvalidLength {
            expected: len,
            actual: data.len(),
        });
    }
    let (head, rest) = data.split_at(len);
    *data = rest;
    Ok(head)
}
