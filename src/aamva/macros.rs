macro_rules! data_elements_enum {
	($(#[$enum_meta:meta])* $vis:vis enum $enum_id:ident { $($(#[$meta:meta])* $id:ident : $tag:literal),* }) => {
		$(#[$enum_meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		$vis enum $enum_id {
			$($(#[$meta])* $id),*
		}

		impl $enum_id {
			pub const COUNT: usize = $crate::aamva::data_elements_enum!(@count $($id,)*);
			pub const LIST: [Self; Self::COUNT] = [$(Self::$id),*];

			pub fn from_id(id: &[u8; 3]) -> Option<Self> {
				match id {
					$($tag => Some(Self::$id),)*
					_ => None
				}
			}

			pub fn id(&self) -> &'static [u8; 3] {
				match self {
					$(Self::$id => $tag),*
				}
			}
		}

		impl $enum_id {
			pub fn string_id(&self) -> &'static str {
				unsafe { std::str::from_utf8_unchecked(self.id()) }
			}
		}

		impl std::fmt::Display for $enum_id {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(self.string_id())
			}
		}
	};
	(@count $a:ident, $($rest:ident,)*) => {
		1usize + $crate::aamva::data_elements_enum!(@count $($rest,)*)
	};
	(@count) => {
		0usize
	}
}

macro_rules! license_data_elements {
	($(#[$enum_meta:meta])* $vis:vis enum $enum_id:ident, struct $struct_id:ident ($partial_id:ident) { $($(#[$meta:meta])* $field:ident $(as $json:literal)? => $id:ident : $tag:literal),* }) => {
		$crate::aamva::data_elements_enum!($(#[$enum_meta])* $vis enum $enum_id { $($(#[$meta])* $id : $tag),* });

		#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
		#[serde(rename_all = "camelCase")]
		$vis struct $struct_id {
			$(
				$(#[$meta])*
				$(#[serde(rename = $json)])?
				pub $field: String,
			)*
		}

		impl $struct_id {
			pub fn new_with(mut f: impl FnMut($enum_id) -> String) -> Self {
				Self {
					$($field: f($enum_id::$id)),*
				}
			}

			pub fn get(&self, element: $enum_id) -> &str {
				match element {
					$($enum_id::$id => self.$field.as_str()),*
				}
			}

			pub fn set(&mut self, element: $enum_id, value: String) {
				match element {
					$($enum_id::$id => { self.$field = value }),*
				}
			}

			pub fn iter(&self) -> impl Iterator<Item = ($enum_id, &str)> {
				[$(($enum_id::$id, self.$field.as_str())),*].into_iter()
			}
		}

		#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
		#[serde(default, rename_all = "camelCase")]
		$vis struct $partial_id {
			$(
				$(#[$meta])*
				$(#[serde(rename = $json)])?
				#[serde(skip_serializing_if = "Option::is_none")]
				pub $field: Option<String>,
			)*
		}

		impl $partial_id {
			pub fn new() -> Self {
				Self::default()
			}

			pub fn is_empty(&self) -> bool {
				$(
					if self.$field.is_some() {
						return false
					}
				)*

				true
			}

			pub fn len(&self) -> usize {
				let mut result = 0;

				$(
					if self.$field.is_some() {
						result += 1
					}
				)*

				result
			}

			pub fn get(&self, element: $enum_id) -> Option<&str> {
				match element {
					$($enum_id::$id => self.$field.as_deref()),*
				}
			}

			pub fn set(&mut self, element: $enum_id, value: String) {
				match element {
					$($enum_id::$id => { self.$field = Some(value) }),*
				}
			}

			pub fn iter(&self) -> impl Iterator<Item = ($enum_id, &str)> {
				[$(
					self.$field
						.as_deref()
						.map(|value| ($enum_id::$id, value))
				),*].into_iter().flatten()
			}

			pub fn build(self) -> Result<$struct_id, $crate::aamva::MissingDataElement<$enum_id>> {
				Ok($struct_id {
					$($field: self.$field.ok_or($crate::aamva::MissingDataElement($enum_id::$id))?),*
				})
			}
		}
	}
}

pub(crate) use data_elements_enum;
pub(crate) use license_data_elements;
