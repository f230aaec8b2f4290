/// A trait for reacting to an alignment from the "old" version to
/// the "new" version.
///
/// The alignment algorithms only report indexes.  A hook that needs the
/// values has to hold on to the sequences itself.
pub trait DiffHook: Sized {
    /// The error produced from the hook methods.
    type Error;

    /// Called when items with indices `old_index` (in the old version) and
    /// `new_index` (in the new version) start a section that is considered
    /// equal by the comparison predicate, of length `len`.
    ///
    /// Note that "equal" only means the predicate accepted the pair.  The
    /// items may still differ verbatim.
    fn equal(&mut self, old_index: usize, new_index: usize, len: usize) -> Result<(), Self::Error> {
        let _ = old_index;
        let _ = new_index;
        let _ = len;
        Ok(())
    }

    /// Called when a section of length `old_len`, starting at `old_index`,
    /// needs to be deleted from the old version.
    fn delete(
        &mut self,
        old_index: usize,
        old_len: usize,
        new_index: usize,
    ) -> Result<(), Self::Error> {
        let _ = old_index;
        let _ = old_len;
        let _ = new_index;
        Ok(())
    }

    /// Called when a section of the new version, of length `new_len`
    /// and starting at `new_index`, needs to be inserted at position `old_index`.
    fn insert(
        &mut self,
        old_index: usize,
        new_index: usize,
        new_len: usize,
    ) -> Result<(), Self::Error> {
        let _ = old_index;
        let _ = new_index;
        let _ = new_len;
        Ok(())
    }

    /// Always called at the end of the algorithm.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<'a, D: DiffHook + 'a> DiffHook for &'a mut D {
    type Error = D::Error;

    fn equal(&mut self, old_index: usize, new_index: usize, len: usize) -> Result<(), Self::Error> {
        (*self).equal(old_index, new_index, len)
    }

    fn delete(
        &mut self,
        old_index: usize,
        old_len: usize,
        new_index: usize,
    ) -> Result<(), Self::Error> {
        (*self).delete(old_index, old_len, new_index)
    }

    fn insert(
        &mut self,
        old_index: usize,
        new_index: usize,
        new_len: usize,
    ) -> Result<(), Self::Error> {
        (*self).insert(old_index, new_index, new_len)
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        (*self).finish()
    }
}

#[test]
fn test_forwarding_through_reference() {
    struct Counter(usize, bool);
    impl DiffHook for Counter {
        type Error = ();
        fn equal(&mut self, _: usize, _: usize, len: usize) -> Result<(), ()> {
            self.0 += len;
            Ok(())
        }
        fn finish(&mut self) -> Result<(), ()> {
            self.1 = true;
            Ok(())
        }
    }

    fn drive<D: DiffHook>(mut d: D) -> Result<(), D::Error> {
        d.equal(0, 0, 3)?;
        d.delete(3, 1, 3)?;
        d.finish()
    }

    let mut counter = Counter(0, false);
    drive(&mut counter).unwrap();
    assert_eq!(counter.0, 3);
    assert!(counter.1);
}
