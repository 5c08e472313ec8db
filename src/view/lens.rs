use std::marker::PhantomData;

// a lens lets a widget reach the one piece of widget state or application data it cares about
// without knowing the shape of the rest of the data struct
pub(crate) trait Lens<A, B> {
    fn with<'a, R: 'a, F: FnOnce(&B) -> R>(&self, a: &A, f: F) -> R;
    fn with_mut<'a, R: 'a, F: FnOnce(&mut B) -> R>(&self, a: &mut A, f: F) -> R;
}

pub(crate) fn from_closures<A, B>(immut: impl Fn(&A) -> &B + Copy, mut_: impl Fn(&mut A) -> &mut B + Copy) -> impl Lens<A, B> + Copy {
    struct Closures<A, B, I: Fn(&A) -> &B, M: Fn(&mut A) -> &mut B> {
        immut: I,
        mut_: M,

        _phantom: PhantomData<fn(&A) -> &B>,
    }

    impl<A, B, I: Fn(&A) -> &B + Copy, M: Fn(&mut A) -> &mut B + Copy> Clone for Closures<A, B, I, M> {
        fn clone(&self) -> Self {
            Self { ..*self }
        }
    }
    impl<A, B, I: Fn(&A) -> &B + Copy, M: Fn(&mut A) -> &mut B + Copy> Copy for Closures<A, B, I, M> {}

    impl<A, B, I: Fn(&A) -> &B, M: Fn(&mut A) -> &mut B> Lens<A, B> for Closures<A, B, I, M> {
        fn with<'a, R: 'a, F: FnOnce(&B) -> R>(&self, a: &A, f: F) -> R {
            f((self.immut)(a))
        }

        fn with_mut<'a, R: 'a, F: FnOnce(&mut B) -> R>(&self, a: &mut A, f: F) -> R {
            f((self.mut_)(a))
        }
    }

    Closures { immut, mut_, _phantom: PhantomData }
}
