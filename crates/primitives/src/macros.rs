/// Declares a `static` navigation target definition.
///
/// ```
/// use waypost_primitives::{ParameterMode, TargetEntry, target};
///
/// target!(Greeter, {
/// 	description: "Greets the named user",
/// 	parameters: ParameterMode::Required,
/// });
///
/// assert_eq!(Greeter.name(), "Greeter");
/// ```
#[macro_export]
macro_rules! target {
	($name:ident, {
		description: $desc:expr
		$(, parameters: $params:expr)?
		$(,)?
	}) => {
		#[allow(non_upper_case_globals)]
		pub static $name: $crate::TargetDef = $crate::TargetDef {
			meta: $crate::TargetMeta {
				id: concat!(env!("CARGO_PKG_NAME"), "::", stringify!($name)),
				name: stringify!($name),
				description: $desc,
				parameters: $crate::__way_opt!($({$params})?, $crate::ParameterMode::None),
			},
		};
	};
}

/// Declares a `static` parent layout definition.
///
/// ```
/// use waypost_primitives::{LayoutEntry, layout};
///
/// layout!(MainLayout);
///
/// assert_eq!(MainLayout.name(), "MainLayout");
/// ```
#[macro_export]
macro_rules! layout {
	($name:ident) => {
		#[allow(non_upper_case_globals)]
		pub static $name: $crate::LayoutDef = $crate::LayoutDef {
			meta: $crate::LayoutMeta {
				id: concat!(env!("CARGO_PKG_NAME"), "::", stringify!($name)),
				name: stringify!($name),
			},
		};
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __way_opt {
	({ $value:expr }, $default:expr) => {
		$value
	};
	(, $default:expr) => {
		$default
	};
}
