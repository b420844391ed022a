macro_rules! count {
    ($_:ident) => {
        1
    };
    ($_:ident, $($remain:ident),+) => {
        1+count!($($remain),+)
    };
}

/// Declare the fixed joint set. Generates the `Joint` enum, its `JOINT_COUNT`,
/// an `ALL` table in declaration order, and snake_case names for every joint.
macro_rules! impl_joints {
    ($($joint:ident),+ $(,)?) => {
        ::paste::paste! {
            pub const JOINT_COUNT: usize = count!($($joint),+);

            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
            #[serde(rename_all = "snake_case")]
            pub enum Joint {
                $($joint,)+
            }

            impl Joint {
                /// Every joint, in stable declaration order
                pub const ALL: [Joint; JOINT_COUNT] = [$(Joint::$joint),+];

                #[inline]
                pub const fn idx(self) -> usize {
                    self as usize
                }

                pub const fn name(self) -> &'static str {
                    match self {
                        $(Self::$joint => stringify!([<$joint:snake>]),)+
                    }
                }
            }
        }
    };
}

#[macro_export]
macro_rules! assert_f64_approx {
    ($l:expr, $r:expr) => {
        assert!(
            ($l - $r).abs() < 1e-9,
            "assertion failed: {} !~ {}",
            $l,
            $r
        )
    };
    ($l:expr, $r:expr, $msg:expr) => {
        assert!(
            ($l - $r).abs() < 1e-9,
            "assertion failed: {} !~ {}: {}",
            $l,
            $r,
            $msg
        )
    };
}
